//! Fixed document skeleton.

use crate::markup::MarkupNode;

/// Doctype emitted at the start of every document.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Text of the `<title>` element.
pub const DOCUMENT_TITLE: &str = "Web Application";

/// Shared stylesheet path, relative to the static root.
pub const STYLESHEET_PATH: &str = "css/style.css";

/// Wraps a mount element and a script element in a complete HTML document.
///
/// The head holds the title and a stylesheet link pointing at
/// `{static_root}css/style.css`; the body holds `mount` followed by `script`.
/// Both are inserted verbatim. `static_root` is not validated and is
/// conventionally terminated by `/`.
///
/// # Example
///
/// ```
/// use jstemplate_pages::assemble;
///
/// let html = assemble("/static/", "<div id='root'></div>", "<script></script>");
/// assert_eq!(
/// 	html,
/// 	"<!DOCTYPE html><html><head><title>Web Application</title>\
/// 	 <link rel='stylesheet' type='text/css' href='/static/css/style.css' /></head>\
/// 	 <body><div id='root'></div><script></script></body></html>"
/// );
/// ```
pub fn assemble(static_root: &str, mount: &str, script: &str) -> String {
	let mut title = MarkupNode::new("title");
	title.set_content(DOCUMENT_TITLE);

	let stylesheet = MarkupNode::new("link")
		.attr("rel", "stylesheet")
		.attr("type", "text/css")
		.attr("href", format!("{static_root}{STYLESHEET_PATH}"));

	let mut head = MarkupNode::new("head");
	head.add(&title).add(&stylesheet);

	let mut body = MarkupNode::new("body");
	body.add(mount).add(script);

	let mut html = MarkupNode::new("html");
	html.add(&head).add(&body);

	let mut document = String::with_capacity(DOCTYPE.len() + html.content().len() + 16);
	document.push_str(DOCTYPE);
	document.push_str(&html.to_html());
	document
}
