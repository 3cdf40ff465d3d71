//! Notification and SMTP command handlers.

use super::commands::{NotifyCommands, SmtpCommands};
use tessera_core::SmtpConfig;
use tessera_error::{JsonError, TesseraResult};
use tessera_notify::{EmailService, SimulatedNotifier, probe_smtp};
use tessera_server::SiteConfig;

/// Send one simulated email and print the outcome.
pub async fn handle_notify_command(cmd: NotifyCommands) -> TesseraResult<()> {
    let config = SiteConfig::load()?;
    let service = EmailService::new(SimulatedNotifier::new(config.delays().email_delays()));

    let outcome = match cmd {
        NotifyCommands::Waitlist {
            email,
            product,
            name,
        } => {
            service
                .send_waitlist_confirmation(&email, &product, name.as_deref())
                .await?
        }
        NotifyCommands::Contact {
            email,
            name,
            subject,
        } => {
            service
                .send_contact_confirmation(&email, &name, &subject)
                .await?
        }
    };

    let json =
        serde_json::to_string_pretty(&outcome).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Validate SMTP settings without connecting.
pub async fn handle_smtp_command(cmd: SmtpCommands) -> TesseraResult<()> {
    match cmd {
        SmtpCommands::Test {
            host,
            port,
            user,
            password,
            secure,
        } => {
            let config = SiteConfig::load()?;
            let smtp = SmtpConfig {
                host,
                port,
                secure,
                user,
                password,
                ..SmtpConfig::default()
            };
            let report = probe_smtp(&smtp, config.delays().test_smtp()).await?;
            println!("{}", report.message);
        }
    }
    Ok(())
}
