//! Fixed email templates.
//!
//! Interpolated values are HTML-escaped in the HTML body and inserted
//! verbatim into the subject and plain-text body.

use tessera_core::{SmtpConfig, escape_html};

/// Subject plus HTML and plain-text bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
    /// Plain-text body
    pub text: String,
}

const BRAND: &str = "Tessera Financial";

fn wrap_html(heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{heading}</title></head>
<body style="font-family: Arial, sans-serif; color: #1f2937; max-width: 600px; margin: 0 auto;">
<div style="background: #0f172a; color: #ffffff; padding: 24px; text-align: center;">
<h1 style="margin: 0;">{brand}</h1>
</div>
<div style="padding: 24px;">
<h2>{heading}</h2>
{body}
</div>
<div style="padding: 16px; font-size: 12px; color: #6b7280; text-align: center;">
&copy; {brand}. You are receiving this email because you contacted us.
</div>
</body>
</html>"#,
        heading = heading,
        body = body,
        brand = BRAND,
    )
}

/// Waitlist signup confirmation.
///
/// # Examples
///
/// ```
/// use tessera_notify::templates::waitlist_confirmation;
///
/// let t = waitlist_confirmation("Tessera <Card>", Some("Ana"));
/// assert_eq!(t.subject, "You're on the waitlist for Tessera <Card>!");
/// assert!(t.html.contains("Tessera &lt;Card&gt;"));
/// assert!(t.text.starts_with("Hi Ana,"));
/// ```
pub fn waitlist_confirmation(product_name: &str, user_name: Option<&str>) -> Template {
    let greeting = user_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("there");
    let product_html = escape_html(product_name);

    let body = format!(
        "<p>Hi {},</p>\n\
         <p>Thanks for joining the waitlist for <strong>{}</strong>. \
         We'll email you as soon as it's ready for you.</p>\n\
         <p>In the meantime, explore our live products at tessera.example.</p>",
        escape_html(greeting),
        product_html,
    );

    Template {
        subject: format!("You're on the waitlist for {}!", product_name),
        html: wrap_html("You're on the list!", &body),
        text: format!(
            "Hi {},\n\n\
             Thanks for joining the waitlist for {}. \
             We'll email you as soon as it's ready for you.\n\n\
             The {} team",
            greeting, product_name, BRAND
        ),
    }
}

/// Contact form acknowledgement.
///
/// # Examples
///
/// ```
/// use tessera_notify::templates::contact_confirmation;
///
/// let t = contact_confirmation("Ana", "Fees");
/// assert_eq!(t.subject, "We received your message: Fees");
/// ```
pub fn contact_confirmation(name: &str, subject: &str) -> Template {
    let body = format!(
        "<p>Hi {},</p>\n\
         <p>Thanks for reaching out. We received your message about \
         <strong>{}</strong> and a member of our team will reply within \
         one business day.</p>",
        escape_html(name),
        escape_html(subject),
    );

    Template {
        subject: format!("We received your message: {}", subject),
        html: wrap_html("Thanks for contacting us", &body),
        text: format!(
            "Hi {},\n\n\
             Thanks for reaching out. We received your message about \"{}\" \
             and a member of our team will reply within one business day.\n\n\
             The {} team",
            name, subject, BRAND
        ),
    }
}

/// Message sent from the settings screen to check a relay configuration.
pub fn test_email(smtp: &SmtpConfig) -> Template {
    let body = format!(
        "<p>This is a test email from the {} admin console.</p>\n\
         <p>Relay: <code>{}:{}</code><br>Sender: {}</p>",
        BRAND,
        escape_html(&smtp.host),
        smtp.port,
        escape_html(&smtp.sender()),
    );

    Template {
        subject: format!("{} SMTP test", BRAND),
        html: wrap_html("SMTP test", &body),
        text: format!(
            "This is a test email from the {} admin console.\n\
             Relay: {}:{}\nSender: {}",
            BRAND,
            smtp.host,
            smtp.port,
            smtp.sender()
        ),
    }
}
