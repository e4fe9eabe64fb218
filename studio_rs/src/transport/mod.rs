//! Outbound delivery of the contact form.
//!
//! The contract is one `POST {base}/api/contact` with a JSON body of the five
//! form fields. Any 2xx is a success; everything else, including a transport
//! error or a timeout, is a failure. The response body is never read.

use std::future::Future;

use crate::contact::ContactForm;
use crate::error::DeliveryError;

#[cfg(feature = "cli")]
mod http;

#[cfg(feature = "cli")]
pub use http::HttpTransport;

/// Path of the contact endpoint, relative to the backend base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// Successful delivery: the backend answered with a 2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
}

/// Sends a contact form to the backend, once per call.
///
/// Implementations must not retry on their own.
pub trait ContactTransport {
    fn deliver(&self, form: &ContactForm) -> impl Future<Output = Result<Delivery, DeliveryError>>;
}

impl<T: ContactTransport + ?Sized> ContactTransport for &T {
    fn deliver(&self, form: &ContactForm) -> impl Future<Output = Result<Delivery, DeliveryError>> {
        (**self).deliver(form)
    }
}

/// `{base}/api/contact`, tolerating a trailing slash on `base`.
/// An empty base yields the same-origin relative path.
pub fn contact_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH)
}

/// Map an HTTP status code to the delivery contract.
pub fn classify_status(status: u16) -> Result<Delivery, DeliveryError> {
    if (200..300).contains(&status) {
        Ok(Delivery { status })
    } else {
        Err(DeliveryError::Rejected { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base() {
        assert_eq!(
            contact_endpoint("https://api.gotech.solutions"),
            "https://api.gotech.solutions/api/contact"
        );
        assert_eq!(
            contact_endpoint("http://localhost:8001/"),
            "http://localhost:8001/api/contact"
        );
        assert_eq!(contact_endpoint(""), "/api/contact");
    }

    #[test]
    fn only_2xx_counts_as_delivered() {
        assert_eq!(classify_status(200), Ok(Delivery { status: 200 }));
        assert_eq!(classify_status(204), Ok(Delivery { status: 204 }));
        for status in [301, 400, 404, 422, 500, 503] {
            assert_eq!(
                classify_status(status),
                Err(DeliveryError::Rejected { status })
            );
        }
    }
}
