//! User-visible texts shown by the catalog and order views.

/// Every piece of text the storefront shows to a visitor.
///
/// Defaults are the Portuguese texts of the published storefront. Override
/// individual fields with struct update syntax:
///
/// ```rust
/// use sheet_storefront::Messages;
///
/// let messages = Messages {
///     order_button: "Order".to_string(),
///     ..Messages::default()
/// };
/// assert_eq!(messages.order_button, "Order");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    /// Shown in the catalog container before the read completes.
    pub catalog_loading: String,
    /// Shown when the catalog has no products.
    pub catalog_empty: String,
    /// Prefix of the message shown when the catalog request fails in transit.
    pub catalog_connection_error: String,
    /// Shown when the service reports an error without a message.
    pub catalog_unknown_error: String,
    /// Prefix of the HTTP status message (`Erro HTTP: 500`).
    pub http_status_error: String,
    /// Card name placeholder.
    pub unnamed_product: String,
    /// Card description placeholder.
    pub no_description: String,
    /// Card price placeholder.
    pub price_unavailable: String,
    /// Label of the price line on a card.
    pub price_label: String,
    /// Label of the stock line on a card.
    pub stock_label: String,
    /// Label of the card's order button.
    pub order_button: String,
    /// Idle label of the order submit control.
    pub submit_label: String,
    /// Label of the submit control while a submission is in flight.
    pub submit_processing: String,
    /// Feedback text while a submission is in flight.
    pub order_sending: String,
    /// Feedback text after success when the service sent no message.
    pub order_success: String,
    /// Feedback text after a rejection when the service sent no message.
    pub order_unknown_error: String,
    /// Prefix of the feedback text when the submission fails in transit.
    pub order_connection_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            catalog_loading: "A carregar produtos...".to_string(),
            catalog_empty: "Neste momento, não temos produtos disponíveis.".to_string(),
            catalog_connection_error: "Não foi possível ligar ao catálogo".to_string(),
            catalog_unknown_error: "Erro desconhecido ao carregar dados.".to_string(),
            http_status_error: "Erro HTTP".to_string(),
            unnamed_product: "Produto Sem Nome".to_string(),
            no_description: "Sem descrição.".to_string(),
            price_unavailable: "N/A".to_string(),
            price_label: "Preço".to_string(),
            stock_label: "Stock".to_string(),
            order_button: "Encomendar".to_string(),
            submit_label: "Submeter Encomenda".to_string(),
            submit_processing: "A processar...".to_string(),
            order_sending: "A enviar encomenda para o sistema...".to_string(),
            order_success: "Encomenda registada com sucesso!".to_string(),
            order_unknown_error: "Erro desconhecido ao registar encomenda.".to_string(),
            order_connection_error: "Falha na comunicação com o servidor".to_string(),
        }
    }
}

impl Messages {
    /// Formats the message for a non-success HTTP status.
    #[must_use]
    pub fn http_status(&self, code: u16) -> String {
        format!("{}: {code}", self.http_status_error)
    }

    /// Formats the catalog connectivity message around the underlying error.
    #[must_use]
    pub fn catalog_connection(&self, error: &dyn std::fmt::Display) -> String {
        format!("{}: {error}", self.catalog_connection_error)
    }

    /// Formats the order connectivity message around the underlying error.
    #[must_use]
    pub fn order_connection(&self, error: &dyn std::fmt::Display) -> String {
        format!("{}: {error}", self.order_connection_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_includes_code() {
        let messages = Messages::default();
        assert_eq!(messages.http_status(503), "Erro HTTP: 503");
    }

    #[test]
    fn test_connection_messages_include_error_text() {
        let messages = Messages::default();
        let text = messages.catalog_connection(&"connection refused");
        assert_eq!(text, "Não foi possível ligar ao catálogo: connection refused");

        let text = messages.order_connection(&"timed out");
        assert_eq!(text, "Falha na comunicação com o servidor: timed out");
    }
}
