use dialoguer::{theme::ColorfulTheme, Input};
use itertools::Itertools;

use crate::{
    config::Config,
    db::database::Database,
    ledger::api::LedgerClient,
    utils::misc::{format_units, separator, to_base_units},
};

/// Shows the attendee's token balance and claimed collectibles, and caches
/// the balance back into the database file.
pub async fn show_wallet(
    mut db: Database,
    config: &Config,
    ledger: &LedgerClient,
) -> eyre::Result<()> {
    let index = super::select_account_index(&db)?;
    let account_id = db.accounts()[index].get_account_id().to_string();

    let raw_balance = ledger.token_balance(&account_id).await?;
    let balance = format_units(&raw_balance, config.token_decimals)?;

    db.accounts_mut()[index].set_balance(balance);
    db.update();

    println!("{}", separator());
    tracing::info!("Account: `{}`", account_id);
    tracing::info!("Balance: {} {}", balance, config.token_symbol);

    let drops = ledger.claimed_drops(&account_id).await?;

    if drops.is_empty() {
        tracing::info!("No collectibles claimed yet");
    } else {
        let listing = drops
            .iter()
            .map(|drop| format!("`{}` ({}, {})", drop.name, drop.kind, drop.drop_id))
            .join(", ");

        tracing::info!("Collectibles: {}", listing);
    }

    Ok(())
}

pub async fn send_tokens(db: &Database, config: &Config, ledger: &LedgerClient) -> eyre::Result<()> {
    let index = super::select_account_index(db)?;
    let sender_id = db.accounts()[index].get_account_id().to_string();

    let receiver_id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Receiver account id")
        .interact_text()?;

    if receiver_id.trim() == sender_id {
        tracing::warn!("Cannot send tokens to yourself");
        return Ok(());
    }

    let amount: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Amount of {} to send", config.token_symbol))
        .interact_text()?;

    let raw_amount = to_base_units(amount, config.token_decimals);
    ledger
        .transfer_tokens(&sender_id, receiver_id.trim(), &raw_amount)
        .await?;

    tracing::info!(
        "Sent {} {} to `{}`",
        amount,
        config.token_symbol,
        receiver_id.trim()
    );

    Ok(())
}
