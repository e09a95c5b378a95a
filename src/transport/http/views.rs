//! Server-side HTML rendering.
//!
//! Every page goes through [`layout`], which supplies the document shell, the
//! navigation bar and the stylesheet link. User data is escaped on the way in.

use crate::domain::contact::{Contact, ContactForm, ValidationError};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn contact_href(name: &str) -> String {
    format!("/contact/{}", urlencoding::encode(name))
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <link rel="stylesheet" href="/css/style.css" />
  </head>
  <body>
    <nav class="navbar">
      <a class="brand" href="/">Contact Book</a>
      <a href="/">Home</a>
      <a href="/about">About</a>
      <a href="/contact">Contact</a>
    </nav>
    <main class="container">
{body}
    </main>
  </body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn home_page(contacts: &[Contact]) -> String {
    let mut body = String::from("      <h1>Welcome to the contact book</h1>\n");
    if contacts.is_empty() {
        body.push_str("      <p>No contacts yet. <a href=\"/contact/add\">Add the first one</a>.</p>\n");
    } else {
        body.push_str(&format!(
            "      <p>You have {} contact(s):</p>\n      <ul>\n",
            contacts.len()
        ));
        body.extend(contacts.iter().map(|c| {
            format!(
                "        <li><a href=\"{}\">{}</a></li>\n",
                escape(&contact_href(&c.name)),
                escape(&c.name)
            )
        }));
        body.push_str("      </ul>\n");
    }
    layout("My Website", &body)
}

pub fn about_page() -> String {
    layout(
        "About Page",
        "      <h1>About</h1>\n      <p>A small contact book: names, emails and phone numbers kept in one JSON file.</p>\n",
    )
}

pub fn contact_list_page(contacts: &[Contact], flash: Option<&str>) -> String {
    let mut body = String::from("      <h1>Contact List</h1>\n");
    if let Some(msg) = flash {
        body.push_str(&format!(
            "      <div class=\"alert alert-success\">{}</div>\n",
            escape(msg)
        ));
    }
    body.push_str("      <a class=\"button\" href=\"/contact/add\">Add contact</a>\n");
    if contacts.is_empty() {
        body.push_str("      <div class=\"alert alert-info\">Contact list is empty!</div>\n");
    } else {
        body.push_str(
            "      <table>\n        <thead><tr><th>#</th><th>Name</th><th>Email</th><th></th></tr></thead>\n        <tbody>\n",
        );
        for (i, c) in contacts.iter().enumerate() {
            body.push_str(&format!(
                "          <tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"{}\">Detail</a></td></tr>\n",
                i + 1,
                escape(&c.name),
                escape(&c.email),
                escape(&contact_href(&c.name))
            ));
        }
        body.push_str("        </tbody>\n      </table>\n");
    }
    layout("Contact Page", &body)
}

pub fn detail_page(contact: &Contact) -> String {
    let encoded = urlencoding::encode(&contact.name);
    let body = format!(
        r#"      <h1>Contact Detail</h1>
      <dl>
        <dt>Name</dt><dd>{name}</dd>
        <dt>Email</dt><dd>{email}</dd>
        <dt>Phone</dt><dd>{phone}</dd>
      </dl>
      <a class="button" href="/contact/edit/{encoded}">Edit</a>
      <a class="button danger" href="/contact/delete/{encoded}" onclick="return confirm('Delete this contact?');">Delete</a>
      <a href="/contact">Back to contact list</a>
"#,
        name = escape(&contact.name),
        email = escape(&contact.email),
        phone = escape(&contact.phone),
        encoded = escape(&encoded),
    );
    layout("Detail Contact Page", &body)
}

pub fn add_contact_page(form: &ContactForm, errors: &[ValidationError]) -> String {
    let body = format!(
        "      <h1>Add Contact</h1>\n{}{}",
        error_list(errors),
        contact_form("/contact", form, false, "Add contact")
    );
    layout("Add Data Contact Form", &body)
}

pub fn edit_contact_page(form: &ContactForm, errors: &[ValidationError]) -> String {
    let body = format!(
        "      <h1>Edit Contact</h1>\n{}{}",
        error_list(errors),
        contact_form("/contact/update", form, true, "Save changes")
    );
    layout("Edit Data Contact Form", &body)
}

pub fn not_found_page() -> String {
    "<h1>404</h1>".to_string()
}

pub fn internal_error_page() -> String {
    "<h1>500</h1>".to_string()
}

fn error_list(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("      <div class=\"alert alert-danger\">\n        <ul>\n");
    for e in errors {
        out.push_str(&format!("          <li>{}</li>\n", escape(&e.message)));
    }
    out.push_str("        </ul>\n      </div>\n");
    out
}

fn contact_form(action: &str, form: &ContactForm, with_old_name: bool, submit: &str) -> String {
    let old_name = if with_old_name {
        let old = form.old_name.as_deref().unwrap_or(&form.name);
        format!(
            "        <input type=\"hidden\" name=\"oldName\" value=\"{}\" />\n",
            escape(old)
        )
    } else {
        String::new()
    };
    format!(
        r#"      <form method="post" action="{action}">
{old_name}        <label for="name">Name</label>
        <input type="text" id="name" name="name" value="{name}" required />
        <label for="email">Email</label>
        <input type="email" id="email" name="email" value="{email}" required />
        <label for="phone">Phone</label>
        <input type="text" id="phone" name="phone" value="{phone}" required />
        <button type="submit">{submit}</button>
      </form>
"#,
        action = action,
        old_name = old_name,
        name = escape(&form.name),
        email = escape(&form.email),
        phone = escape(&form.phone),
        submit = escape(submit),
    )
}
