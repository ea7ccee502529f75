use crate::utils::misc::separator;

use super::{dispatch::ClaimOutcome, ScanError};

/// Single parametrized presenter over every scan outcome. Already-claimed is
/// informational and errors are transient warnings; nothing here is fatal.
pub fn present_outcome(outcome: &ClaimOutcome, token_symbol: &str) {
    println!("{}", separator());

    match outcome {
        ClaimOutcome::AlreadyClaimed => {
            tracing::info!("You already scanned this code");
        }
        ClaimOutcome::ScavengerPiece { found, required } => {
            tracing::info!("Scavenger piece found: {} of {} collected", found, required);
        }
        ClaimOutcome::ScavengerComplete { required, reward } => {
            tracing::info!(
                "Scavenger hunt completed! All {} pieces collected, reward: `{}`",
                required,
                reward
            );
        }
        ClaimOutcome::TokenAward { amount } => {
            tracing::info!("Claimed {} {}", amount, token_symbol);
        }
        ClaimOutcome::NftAward { name, media } if media.is_empty() => {
            tracing::info!("Claimed NFT `{}`", name);
        }
        ClaimOutcome::NftAward { name, media } => {
            tracing::info!("Claimed NFT `{}` ({})", name, media);
        }
        ClaimOutcome::FollowUpPrompt { follow_up, id } => {
            tracing::info!("Code routes to a {} prompt (`{}`)", follow_up, id);
        }
        ClaimOutcome::TransferPrompt { receiver } => {
            tracing::info!("Profile scanned: `{}`", receiver);
        }
    }
}

pub fn present_error(err: &ScanError) {
    tracing::warn!("{}", err);
}
