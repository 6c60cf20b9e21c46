use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        let mut tera = Tera::default();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self { tera: tera.into() }
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::{AutoReplyTemplate, ContactNotificationTemplate};

    use super::*;

    #[test]
    fn contact_notification() {
        let sut = TemplateServiceImpl::default();

        let result = sut
            .render(&ContactNotificationTemplate {
                name: "Max Mustermann".into(),
                email: "max.mustermann@example.de".into(),
                content: "Hello World!".into(),
            })
            .unwrap();

        assert_eq!(
            result,
            "Message from Max Mustermann (max.mustermann@example.de):\n\nHello World!\n"
        );
    }

    #[test]
    fn auto_reply_with_links() {
        let sut = TemplateServiceImpl::default();

        let result = sut
            .render(&AutoReplyTemplate {
                name: "Max".into(),
                sender_name: "Portfolio".into(),
                portfolio_url: Some("https://example.com/".into()),
                github_url: Some("https://github.com/example".into()),
                linkedin_url: None,
                whatsapp_url: None,
            })
            .unwrap();

        assert!(result.starts_with("Hi Max!\n"));
        assert!(result.contains("GitHub: https://github.com/example\n"));
        assert!(result.contains("Portfolio: https://example.com/\n"));
        assert!(!result.contains("LinkedIn"));
        assert!(!result.contains("WhatsApp"));
        assert!(result.ends_with("Best regards,\nPortfolio\n"));
    }

    #[test]
    fn auto_reply_without_links() {
        let sut = TemplateServiceImpl::default();

        let result = sut
            .render(&AutoReplyTemplate {
                name: "Max".into(),
                sender_name: "Portfolio".into(),
                portfolio_url: None,
                github_url: None,
                linkedin_url: None,
                whatsapp_url: None,
            })
            .unwrap();

        assert!(!result.contains("http"));
    }
}
