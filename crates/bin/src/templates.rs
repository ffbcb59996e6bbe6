//! HTML templates for web interface
//!
//! Simple inline HTML templates without a template engine. Every page goes
//! through [`layout`], which renders the flash message and the sign-in status.

/// Common CSS styles for all pages
const COMMON_STYLES: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        max-width: 1000px;
        margin: 40px auto;
        padding: 0 20px;
        background: #f5f5f5;
    }
    .container {
        background: white;
        padding: 30px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    h1 {
        color: #333;
        border-bottom: 2px solid #0066cc;
        padding-bottom: 10px;
    }
    a {
        color: #0066cc;
        text-decoration: none;
    }
    .form-group {
        margin: 15px 0;
    }
    label {
        display: block;
        font-weight: bold;
        margin-bottom: 5px;
        color: #333;
    }
    input[type="text"],
    input[type="password"],
    textarea {
        width: 100%;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 4px;
        font-size: 14px;
        box-sizing: border-box;
    }
    textarea {
        font-family: monospace;
        resize: vertical;
    }
    button {
        background: #0066cc;
        color: white;
        padding: 10px 20px;
        border: none;
        border-radius: 4px;
        cursor: pointer;
        font-size: 14px;
        font-weight: bold;
    }
    button:hover {
        background: #0052a3;
    }
    .inline {
        display: inline;
    }
    .link-btn {
        background: none;
        color: #d9534f;
        padding: 0;
        font-weight: normal;
    }
    .status {
        color: #666;
        float: right;
    }
    ul.documents li {
        margin: 8px 0;
    }
    .actions a,
    .actions form {
        margin-left: 10px;
    }
    .flash {
        color: #31708f;
        background: #d9edf7;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
"#;

/// Per-request values every page needs
#[derive(Debug, Default)]
pub struct Page {
    /// Message to show at the top of the page
    pub flash: Option<String>,
    /// Signed-in username, if any
    pub username: Option<String>,
}

/// Wrap a page body with the common head, status bar and flash message
fn layout(page: &Page, title: &str, body: &str) -> String {
    let flash_html = page.flash.as_deref().map_or(String::new(), |m| {
        format!(r#"<div class="flash">{}</div>"#, html_escape(m))
    });

    let status_html = match page.username.as_deref() {
        Some(user) => format!(
            r#"<div class="status">Signed in as {}.
            <form method="POST" action="/users/signout" class="inline">
                <button type='submit'>Sign Out</button>
            </form>
        </div>"#,
            html_escape(user)
        ),
        None => r#"<div class="status">
            <a href="/users/signin">Sign In</a> | <a href="/users/signup">Sign Up</a>
        </div>"#
            .to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Folio - {}</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
        {status_html}
        {flash_html}
        {body}
    </div>
</body>
</html>"#,
        html_escape(title)
    )
}

/// Render the document index
pub fn index_page(page: &Page, files: &[String]) -> String {
    let items: String = files
        .iter()
        .map(|file| {
            let name = html_escape(file);
            format!(
                r#"<li>
                <a href="/{name}">{name}</a>
                <span class="actions">
                    <a href="/{name}/edit">edit</a>
                    <a href="/{name}/copy">copy</a>
                    <form method="POST" action="/{name}/delete" class="inline">
                        <button type='submit' class="link-btn">delete</button>
                    </form>
                </span>
            </li>"#
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Documents</h1>
        <ul class="documents">
            {items}
        </ul>
        <p><a href="/new">New Document</a></p>"#
    );

    layout(page, "Documents", &body)
}

/// Render a markdown document that has already been converted to HTML
pub fn document_page(page: &Page, file: &str, rendered: &str) -> String {
    let body = format!(
        r#"<p><a href="/">&larr; All documents</a></p>
        <article>
            {rendered}
        </article>"#
    );
    layout(page, file, &body)
}

/// Render the edit form for a document
pub fn edit_page(page: &Page, file: &str, contents: &str) -> String {
    let name = html_escape(file);
    let body = format!(
        r#"<h1>Edit {name}</h1>
        <form method="POST" action="/{name}">
            <div class="form-group">
                <label for="content">Edit content of {name}:</label>
                <textarea id="content" name="content" rows="20">{}</textarea>
            </div>
            <button type='submit'>Save Changes</button>
        </form>"#,
        html_escape(contents)
    );
    layout(page, file, &body)
}

/// Render the new document form
pub fn new_page(page: &Page, file_name: &str) -> String {
    let body = format!(
        r#"<h1>New Document</h1>
        <form method="POST" action="/create">
            <div class="form-group">
                <label for="file_name">Add a new document:</label>
                <input type="text" id="file_name" name="file_name" value="{}" autofocus>
            </div>
            <button type='submit'>Create</button>
        </form>"#,
        html_escape(file_name)
    );
    layout(page, "New Document", &body)
}

/// Render the copy form for a document
pub fn copy_page(page: &Page, file: &str, file_name: &str) -> String {
    let name = html_escape(file);
    let body = format!(
        r#"<h1>Copy {name}</h1>
        <form method="POST" action="/{name}/copy">
            <div class="form-group">
                <label for="file_name">Name of the copy:</label>
                <input type="text" id="file_name" name="file_name" value="{}" autofocus>
            </div>
            <button type='submit'>Copy</button>
        </form>"#,
        html_escape(file_name)
    );
    layout(page, &format!("Copy {file}"), &body)
}

/// Render the sign-in page
pub fn sign_in_page(page: &Page, username: &str) -> String {
    let body = format!(
        r#"<h1>Sign In</h1>
        <form method="POST" action="/users/signin">
            <div class="form-group">
                <label for="username">Username:</label>
                <input type="text" id="username" name="username" value="{}" autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password">
            </div>
            <button type='submit'>Sign In</button>
        </form>
        <p>Don't have an account? <a href="/users/signup">Sign up here</a></p>"#,
        html_escape(username)
    );
    layout(page, "Sign In", &body)
}

/// Render the sign-up page
pub fn sign_up_page(page: &Page, username: &str) -> String {
    let body = format!(
        r#"<h1>Sign Up</h1>
        <form method="POST" action="/users/signup">
            <div class="form-group">
                <label for="username">Username:</label>
                <input type="text" id="username" name="username" value="{}" autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password">
            </div>
            <div class="form-group">
                <label for="confirmation">Confirm Password:</label>
                <input type="password" id="confirmation" name="confirmation">
            </div>
            <button type='submit'>Create Account</button>
        </form>
        <p>Already have an account? <a href="/users/signin">Sign in here</a></p>"#,
        html_escape(username)
    );
    layout(page, "Sign Up", &body)
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(flash: Option<&str>) -> Page {
        Page {
            flash: flash.map(str::to_string),
            username: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_layout_status() {
        let html = index_page(&Page::default(), &[]);
        assert!(html.contains("Sign In"));
        assert!(!html.contains("Signed in as"));

        let html = index_page(&signed_in(None), &[]);
        assert!(html.contains("Signed in as admin"));
        assert!(html.contains("Sign Out"));
    }

    #[test]
    fn test_flash_is_escaped() {
        let html = index_page(&signed_in(Some("<b>hi</b>")), &[]);
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn test_index_links() {
        let html = index_page(&Page::default(), &["about.md".to_string()]);
        assert!(html.contains(r#"href="/about.md""#));
        assert!(html.contains(r#"href="/about.md/edit""#));
        assert!(html.contains(r#"action="/about.md/delete""#));
        assert!(html.contains("New Document"));
    }

    #[test]
    fn test_edit_page_escapes_contents() {
        let html = edit_page(&signed_in(None), "notes.md", "</textarea><script>");
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
        assert!(html.contains("<textarea"));
        assert!(html.contains("<button type='submit'"));
    }
}
