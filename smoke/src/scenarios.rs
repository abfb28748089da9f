//! Per-resource smoke scenarios.

use std::future::Future;

use postgrid_sdk::{
    Address, AddressInput, BankAccountCreate, CheckCreate, ClientError, ContactCreate,
    CreateOptions, LetterCreate, PostGrid, PostcardCreate, PostcardSize, TemplateCreate,
    WebhookCreate,
};
use tracing::{error, info};

const SAMPLE_PDF_URL: &str = "https://www.icnaam.org/documents/8x11singlesample.pdf";

/// Step outcomes of a smoke run.
#[derive(Debug, Default)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    /// Awaits one step and records its outcome.
    async fn step<T, F>(&mut self, what: &str, call: F) -> Option<T>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        info!("{}...", what);
        match call.await {
            Ok(value) => {
                self.passed += 1;
                info!("{}: ok", what);
                Some(value)
            }
            Err(e) => {
                self.failed += 1;
                error!(error = %e, "{}: failed", what);
                None
            }
        }
    }
}

fn recipient() -> ContactCreate {
    ContactCreate {
        first_name: Some("Steve".to_string()),
        last_name: Some("Smith".to_string()),
        company_name: Some("Acme Rentals".to_string()),
        address_line1: Some("5454 West 34th Street".to_string()),
        city: Some("Indianapolis".to_string()),
        province_or_state: Some("IN".to_string()),
        postal_or_zip: Some("46224".to_string()),
        country_code: Some("US".to_string()),
        ..Default::default()
    }
}

fn sender() -> ContactCreate {
    ContactCreate {
        first_name: Some("John".to_string()),
        last_name: Some("Quincy".to_string()),
        company_name: Some("US Steel".to_string()),
        address_line1: Some("123 Main Street".to_string()),
        city: Some("Atlanta".to_string()),
        province_or_state: Some("GA".to_string()),
        postal_or_zip: Some("12345".to_string()),
        country_code: Some("US".to_string()),
        ..Default::default()
    }
}

pub async fn contacts(client: &PostGrid, tally: &mut Tally) {
    let contacts = client.contacts();
    let mut create = recipient();
    create.description = Some("smoke contact".to_string());

    let created = tally.step("creating a contact", contacts.create(&create)).await;
    if let Some(contact) = &created {
        tally.step("fetching the contact", contacts.get(&contact.id)).await;
    }
    tally
        .step("listing two contacts", contacts.list(Some(2), None))
        .await;
    if let Some(contact) = &created {
        tally.step("deleting the contact", contacts.delete(&contact.id)).await;
    }
}

pub async fn templates(client: &PostGrid, tally: &mut Tally) {
    let templates = client.templates();
    let create = TemplateCreate::new("<b>Hello</b> {{to.firstName}}!")
        .with_description("smoke template");

    let created = tally.step("creating a template", templates.create(&create)).await;
    if let Some(template) = &created {
        tally.step("fetching the template", templates.get(&template.id)).await;
        let update = TemplateCreate::new("<b>Goodbye</b> {{to.firstName}}!")
            .with_description("smoke template, updated");
        tally
            .step("updating the template", templates.update(&template.id, &update))
            .await;
    }
    tally.step("listing templates", templates.list(None, None)).await;
    if let Some(template) = &created {
        tally.step("deleting the template", templates.delete(&template.id)).await;
    }
}

pub async fn letters(client: &PostGrid, tally: &mut Tally, pdf: Option<Vec<u8>>) {
    let letters = client.letters();
    let mut create = LetterCreate::new(recipient(), sender());
    create.description = Some("smoke letter".to_string());
    let create = match pdf {
        Some(bytes) => create.with_pdf(bytes),
        None => create.with_pdf(SAMPLE_PDF_URL),
    };

    let created = tally
        .step(
            "creating a letter",
            letters.create(create, &CreateOptions::default()),
        )
        .await;
    if let Some(letter) = &created {
        tally.step("fetching the letter", letters.get(&letter.id)).await;
    }
    tally.step("listing two letters", letters.list(Some(2), None)).await;
    if let Some(letter) = &created {
        tally.step("deleting the letter", letters.delete(&letter.id)).await;
    }
}

pub async fn postcards(client: &PostGrid, tally: &mut Tally) {
    let postcards = client.postcards();
    let mut create = PostcardCreate::new(PostcardSize::Small, recipient())
        .with_from(sender())
        .with_html("<b>Greetings</b> {{to.firstName}}", "<i>from Indianapolis</i>");
    create.description = Some("smoke postcard".to_string());

    let created = tally
        .step(
            "creating a postcard",
            postcards.create(&create, &CreateOptions::default()),
        )
        .await;
    if let Some(postcard) = &created {
        tally.step("fetching the postcard", postcards.get(&postcard.id)).await;
    }
    tally.step("listing postcards", postcards.list(None, None)).await;
    if let Some(postcard) = &created {
        tally.step("deleting the postcard", postcards.delete(&postcard.id)).await;
    }
}

fn bank_account() -> BankAccountCreate {
    let mut create = BankAccountCreate::new("Example Bank", "US")
        .with_us_account("123456789", "000123456789")
        .with_signature_text("John Quincy");
    create.description = Some("smoke bank account".to_string());
    create
}

pub async fn bank_accounts(client: &PostGrid, tally: &mut Tally) {
    let accounts = client.bank_accounts();

    let created = tally
        .step("creating a bank account", accounts.create(&bank_account()))
        .await;
    if let Some(account) = &created {
        tally.step("fetching the bank account", accounts.get(&account.id)).await;
    }
    tally.step("listing bank accounts", accounts.list(None, None)).await;
    if let Some(account) = &created {
        tally
            .step("deleting the bank account", accounts.delete(&account.id))
            .await;
    }
}

pub async fn checks(client: &PostGrid, tally: &mut Tally) {
    let accounts = client.bank_accounts();
    let checks = client.checks();

    let Some(account) = tally
        .step("creating a bank account for checks", accounts.create(&bank_account()))
        .await
    else {
        return;
    };

    let mut create = CheckCreate::new(recipient(), sender(), account.id.as_str(), 10_000)
        .with_memo("smoke check")
        .with_letter_pdf(SAMPLE_PDF_URL);
    create.description = Some("smoke check".to_string());

    let created = tally
        .step(
            "creating a check",
            checks.create(&create, &CreateOptions::default()),
        )
        .await;
    if let Some(check) = &created {
        tally.step("fetching the check", checks.get(&check.id)).await;
    }
    tally.step("listing two checks", checks.list(Some(2), None)).await;
    if let Some(check) = &created {
        tally.step("deleting the check", checks.delete(&check.id)).await;
    }
    tally
        .step("deleting the bank account", accounts.delete(&account.id))
        .await;
}

pub async fn webhooks(client: &PostGrid, tally: &mut Tally, callback_url: &str) {
    let webhooks = client.webhooks();
    let mut create = WebhookCreate::new(callback_url, ["letter.created"]);
    create.description = Some("smoke webhook".to_string());

    let created = tally.step("creating a webhook", webhooks.create(&create)).await;
    if let Some(webhook) = &created {
        tally.step("fetching the webhook", webhooks.get(&webhook.id)).await;
    }
    tally.step("listing webhooks", webhooks.list(None, None)).await;
    if let Some(webhook) = &created {
        tally
            .step(
                "listing webhook invocations",
                webhooks.invocations(&webhook.id, None, None),
            )
            .await;
        tally.step("deleting the webhook", webhooks.delete(&webhook.id)).await;
    }
}

pub async fn address(client: &PostGrid, tally: &mut Tally) {
    let addresses = client.addresses();

    if let Some(info) = tally.step("fetching lookup info", addresses.lookup_info()).await {
        info!(
            used = info.data.used,
            remaining = info.data.remaining(),
            "address lookups"
        );
    }

    if let Some(verification) = tally
        .step(
            "verifying a freeform address",
            addresses.verify("3288 Tara Ln, Indianapolis, IN 46224"),
        )
        .await
    {
        info!(verified = verification.verified, "freeform verification");
    }

    let previews = tally
        .step(
            "fetching autocomplete previews",
            addresses.autocomplete_previews("77 main st", None),
        )
        .await;
    if let Some(preview) = previews.and_then(|p| p.data.into_iter().next()) {
        tally
            .step(
                "completing the first preview",
                addresses.autocomplete_address(&preview),
            )
            .await;
    }

    let batch = vec![
        AddressInput::from("3288 Tara Ln, Indianapolis, IN 46224"),
        AddressInput::from(Address::new("3000 Tara Ln", "Indianapolis", "IN", "46224")),
        AddressInput::from("77 S Main St, Aberdeen, SD 57401"),
    ];
    tally
        .step("verifying a batch", addresses.batch_verify(batch))
        .await;
    tally
        .step(
            "suggesting addresses",
            addresses.suggest_addresses("77 main st aberdeen sd"),
        )
        .await;
    tally
        .step(
            "parsing a freeform address",
            addresses.parse_address("3288 Tara Ln, Indianapolis, IN 46224"),
        )
        .await;
    tally
        .step("looking up a city and state", addresses.lookup_city_state("60540"))
        .await;
}
