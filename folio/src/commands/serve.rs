use std::{net::SocketAddr, sync::Arc};

use folio_api_rest::{RateLimitConfig, RealIpConfig, RestServer, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl, ProfileLinks};
use folio_templates_impl::TemplateServiceImpl;
use tracing::{info, warn};

use crate::mailer;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.mailer.api_key.is_none()
        || config.mailer.sender_email.is_none()
        || config.mailer.inbox.is_none()
    {
        warn!("mailer is not fully configured, contact submissions will be rejected");
    }

    let contact = ContactFeatureServiceImpl {
        email: mailer::build(&config.mailer),
        templates: TemplateServiceImpl::default(),
        config: ContactFeatureConfig {
            inbox: config.mailer.inbox.clone().map(Arc::new),
            auto_reply: config.contact.auto_reply,
            sender_name: mailer::sender_name(&config.mailer),
            links: Arc::new(ProfileLinks {
                portfolio: config.profile.portfolio_url.clone(),
                github: config.profile.github_url.clone(),
                linkedin: config.profile.linkedin_url.clone(),
                whatsapp: config.profile.whatsapp_url.clone(),
            }),
        },
    };

    let addr = SocketAddr::from((config.http.host, config.http.port));
    let server = RestServer::new(
        contact,
        RestServerConfig {
            addr,
            allowed_origins: config.cors.allowed_origins.clone(),
            rate_limit: RateLimitConfig {
                capacity: config.rate_limit.capacity,
                refill_per_sec: config.rate_limit.refill_per_sec,
            },
            real_ip: config.http.real_ip.as_ref().map(|real_ip| {
                Arc::new(RealIpConfig {
                    header: real_ip.header.clone(),
                    set_from: real_ip.set_from,
                })
            }),
        },
    );

    info!("Starting http server on {addr}");
    server.serve().await
}
