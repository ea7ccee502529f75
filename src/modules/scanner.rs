use dialoguer::{theme::ColorfulTheme, Input};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    config::Config,
    db::database::Database,
    ledger::api::LedgerClient,
    scan::{
        dispatch::{process_scan, ClaimOutcome},
        guard::ScanGuard,
        present::{present_error, present_outcome},
    },
    utils::misc::to_base_units,
};

/// Check-in scanning loop. The wedge reader types each decoded QR code as a
/// line on stdin; an empty line returns to the menu.
pub async fn scan_codes(db: &Database, config: &Config, ledger: &LedgerClient) -> eyre::Result<()> {
    let index = super::select_account_index(db)?;
    let account_id = db.accounts()[index].get_account_id().to_string();

    let guard = ScanGuard::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!(
        "Scanning as `{}`. Present codes to the reader; empty line exits",
        account_id
    );

    while let Some(line) = lines.next_line().await? {
        let code = line.trim().to_string();

        if code.is_empty() {
            break;
        }

        let Some(_permit) = guard.try_begin() else {
            tracing::debug!("Reader re-emitted a code during cooldown, ignored");
            continue;
        };

        match process_scan(ledger, &account_id, &code, config.token_decimals).await {
            Ok(ClaimOutcome::TransferPrompt { receiver }) => {
                if let Err(e) = transfer_flow(ledger, config, &account_id, &receiver).await {
                    tracing::warn!("{}", e);
                }
            }
            Ok(outcome) => present_outcome(&outcome, &config.token_symbol),
            Err(e) => present_error(&e),
        }
        // Permit drops here; the cooldown window swallows re-reads of the
        // same code still in front of the reader.
    }

    Ok(())
}

async fn transfer_flow(
    ledger: &LedgerClient,
    config: &Config,
    sender_id: &str,
    receiver_id: &str,
) -> eyre::Result<()> {
    let amount: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Amount of {} to send to `{}`",
            config.token_symbol, receiver_id
        ))
        .interact_text()?;

    let raw_amount = to_base_units(amount, config.token_decimals);
    ledger
        .transfer_tokens(sender_id, receiver_id, &raw_amount)
        .await?;

    tracing::info!(
        "Sent {} {} to `{}`",
        amount,
        config.token_symbol,
        receiver_id
    );

    Ok(())
}
