use crate::models::Booking;

use super::mail::OutgoingEmail;

const SENDER_NAME: &str = "Booking Bot";

pub fn booking_email(booking: &Booking, from_address: &str, admin_address: &str) -> OutgoingEmail {
    OutgoingEmail {
        from: format!("{SENDER_NAME} <{from_address}>"),
        to: admin_address.to_string(),
        subject: format!("New Booking: {} ({})", booking.name, booking.service),
        html: booking_html(booking),
    }
}

pub fn booking_html(booking: &Booking) -> String {
    let callable = booking.callable_phone();
    let name = escape_html(&booking.name);

    let rows = [
        ("Name", &booking.name),
        ("Phone", &booking.phone),
        ("Service", &booking.service),
        ("Date", &booking.date),
        ("Time", &booking.time),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            "<tr><td style=\"padding:4px 12px 4px 0;font-weight:bold\">{label}</td><td>{}</td></tr>",
            escape_html(value)
        )
    })
    .collect::<String>();

    format!(
        "<h2>New Booking Request</h2>\
         <table>{rows}</table>\
         <p><a href=\"tel:{callable}\" style=\"display:inline-block;padding:10px 16px;\
         background:#2563eb;color:#fff;text-decoration:none;border-radius:6px\">Call {name}</a></p>"
    )
}

fn escape_html(raw: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking {
            name: "Jane Doe".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            service: "Audit".to_string(),
            date: "2024-05-01".to_string(),
            time: "10:00".to_string(),
        }
    }

    #[test]
    fn test_booking_email_headers() {
        let email = booking_email(&booking(), "bot@example.com", "admin@example.com");
        assert_eq!(email.from, "Booking Bot <bot@example.com>");
        assert_eq!(email.to, "admin@example.com");
        assert_eq!(email.subject, "New Booking: Jane Doe (Audit)");
    }

    #[test]
    fn test_booking_html_contents() {
        let html = booking_html(&booking());
        assert!(html.contains("href=\"tel:+15551234567\""));
        assert!(html.contains("+1 (555) 123-4567"));
        assert!(html.contains("Audit"));
        assert!(html.contains("2024-05-01"));
        assert!(html.contains("10:00"));
        assert!(html.contains("Call Jane Doe"));
    }

    #[test]
    fn test_booking_html_escapes_input() {
        let mut b = booking();
        b.name = "<script>alert('x')</script>".to_string();
        let html = booking_html(&b);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
