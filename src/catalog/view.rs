//! The state of the catalog container and its HTML rendering.

use std::fmt::Write as _;

use crate::catalog::ProductCard;
use crate::config::Messages;

/// What the catalog container shows.
///
/// Every variant except [`Cards`](Self::Cards) shows exactly one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    /// The read has not completed yet.
    Loading {
        /// The loading notice.
        message: String,
    },
    /// One card per product, in response order.
    Cards(Vec<ProductCard>),
    /// The service returned no products.
    Empty {
        /// The "nothing available" notice.
        message: String,
    },
    /// The service answered with `status: "ERROR"`.
    ServiceError {
        /// The service's own message.
        message: String,
    },
    /// The endpoint answered with a non-2xx status.
    HttpFailure {
        /// The HTTP status code.
        status: u16,
        /// The status message (`Erro HTTP: 500`).
        message: String,
    },
    /// The request never produced a usable response.
    ConnectionFailure {
        /// The connectivity message, including the underlying error text.
        message: String,
    },
}

impl CatalogView {
    /// The view shown before the read completes.
    #[must_use]
    pub fn loading(messages: &Messages) -> Self {
        Self::Loading {
            message: messages.catalog_loading.clone(),
        }
    }

    /// Returns the rendered cards; empty for message variants.
    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Returns the single message shown, if this is not a card list.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Cards(_) => None,
            Self::Loading { message }
            | Self::Empty { message }
            | Self::ServiceError { message }
            | Self::HttpFailure { message, .. }
            | Self::ConnectionFailure { message } => Some(message.as_str()),
        }
    }

    /// Returns `true` for the three failure variants.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ServiceError { .. } | Self::HttpFailure { .. } | Self::ConnectionFailure { .. }
        )
    }

    /// Renders the container's inner HTML.
    ///
    /// Cards become `<div class="produto-card">` blocks; every other variant
    /// becomes a single paragraph, with `class="erro"` on failures. All text
    /// is escaped.
    #[must_use]
    pub fn to_html(&self, messages: &Messages) -> String {
        match self {
            Self::Cards(cards) => cards.iter().fold(String::new(), |mut html, card| {
                html.push_str(&card_html(card, messages));
                html
            }),
            other => {
                let message = escape_html(other.message().unwrap_or_default());
                if other.is_error() {
                    format!("<p class=\"erro\">{message}</p>")
                } else {
                    format!("<p>{message}</p>")
                }
            }
        }
    }
}

fn card_html(card: &ProductCard, messages: &Messages) -> String {
    let mut html = String::from("<div class=\"produto-card\">");
    let _ = write!(
        html,
        "<h3>{}</h3><p><strong>{}:</strong> {}</p><p>{}</p><p><strong>{}:</strong> {}</p>\
         <a class=\"encomendar\" href=\"{}\">{}</a>",
        escape_html(&card.name),
        escape_html(&messages.price_label),
        escape_html(&card.price),
        escape_html(&card.description),
        escape_html(&messages.stock_label),
        card.stock,
        escape_html(&card.order_href),
        escape_html(&messages.order_button),
    );
    html.push_str("</div>");
    html
}

/// Escapes text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> ProductCard {
        ProductCard {
            name: name.to_string(),
            price: "€ 10.00".to_string(),
            description: "Pinho".to_string(),
            stock: 2,
            order_href: format!("encomenda.html?produto={name}"),
        }
    }

    #[test]
    fn test_cards_view_has_no_message() {
        let view = CatalogView::Cards(vec![card("Mesa")]);
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.message(), None);
        assert!(!view.is_error());
    }

    #[test]
    fn test_message_views_have_no_cards() {
        let view = CatalogView::ServiceError {
            message: "X".to_string(),
        };
        assert!(view.cards().is_empty());
        assert_eq!(view.message(), Some("X"));
        assert!(view.is_error());
    }

    #[test]
    fn test_loading_view_uses_notice() {
        let messages = Messages::default();
        let view = CatalogView::loading(&messages);
        assert_eq!(view.message(), Some("A carregar produtos..."));
        assert!(!view.is_error());
    }

    #[test]
    fn test_card_html_contains_every_field() {
        let messages = Messages::default();
        let html = CatalogView::Cards(vec![card("Mesa"), card("Cadeira")]).to_html(&messages);

        assert_eq!(html.matches("<div class=\"produto-card\">").count(), 2);
        assert!(html.contains("<h3>Mesa</h3>"));
        assert!(html.contains("<strong>Preço:</strong> € 10.00"));
        assert!(html.contains("<p>Pinho</p>"));
        assert!(html.contains("<strong>Stock:</strong> 2"));
        assert!(html.contains("href=\"encomenda.html?produto=Cadeira\">Encomendar</a>"));
    }

    #[test]
    fn test_error_html_is_marked() {
        let messages = Messages::default();
        let html = CatalogView::HttpFailure {
            status: 500,
            message: "Erro HTTP: 500".to_string(),
        }
        .to_html(&messages);

        assert_eq!(html, "<p class=\"erro\">Erro HTTP: 500</p>");
    }

    #[test]
    fn test_neutral_html_is_plain_paragraph() {
        let messages = Messages::default();
        let html = CatalogView::Empty {
            message: messages.catalog_empty.clone(),
        }
        .to_html(&messages);

        assert_eq!(html, "<p>Neste momento, não temos produtos disponíveis.</p>");
    }

    #[test]
    fn test_html_escapes_service_text() {
        let messages = Messages::default();
        let html = CatalogView::Cards(vec![card("<b>Mesa</b> & \"Banco\"")]).to_html(&messages);

        assert!(html.contains("<h3>&lt;b&gt;Mesa&lt;/b&gt; &amp; &quot;Banco&quot;</h3>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a'b"), "a&#39;b");
        assert_eq!(escape_html("plain"), "plain");
    }
}
