use portfolio::HttpIntake;
use portfolio::config::IntakeConfig;
use portfolio_contact::{ContactFormData, ContactWorkflow, Field};

pub fn intake_config(base_url: impl Into<String>) -> IntakeConfig {
    IntakeConfig {
        base_url: base_url.into(),
        path: "/api/contact".to_owned(),
        timeout_secs: 1,
    }
}

pub fn jane() -> ContactFormData {
    ContactFormData {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello there".to_owned(),
    }
}

pub fn filled_workflow(
    base_url: impl Into<String>,
) -> anyhow::Result<ContactWorkflow<HttpIntake>> {
    let intake = HttpIntake::new(&intake_config(base_url))?;
    let workflow = ContactWorkflow::new(intake);
    let data = jane();

    workflow.update_field(Field::Name, data.name);
    workflow.update_field(Field::Email, data.email);
    workflow.update_field(Field::Subject, data.subject);
    workflow.update_field(Field::Message, data.message);

    Ok(workflow)
}
