use anyhow::Result;
use portfolio::{Config, HttpIntake};
use portfolio_contact::{ContactWorkflow, Field, Notification};

pub struct ContactArgs {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub endpoint: Option<String>,
}

pub async fn send(mut config: Config, args: ContactArgs) -> Result<()> {
    if let Some(endpoint) = args.endpoint {
        config.intake.base_url = endpoint;
    }

    let intake = HttpIntake::new(&config.intake)?;
    tracing::info!(endpoint = %intake.endpoint(), "Sending contact message...");

    let workflow = ContactWorkflow::new(intake);
    workflow.update_field(Field::Name, args.name);
    workflow.update_field(Field::Email, args.email);
    workflow.update_field(Field::Subject, args.subject);
    workflow.update_field(Field::Message, args.message);

    match workflow.submit().await {
        Ok((_, notification)) => {
            print_notification(&notification);

            Ok(())
        }
        Err(err) => {
            if let Some(notification) = Notification::from_error(&err) {
                print_notification(&notification);
            }

            Err(err.into())
        }
    }
}

fn print_notification(notification: &Notification) {
    match &notification.description {
        Some(description) => println!("{}: {description}", notification.title),
        None => println!("{}", notification.title),
    }
}
