use crate::{
    ledger::{
        api::LedgerClient,
        schemas::{ClaimReceipt, DropInfo},
    },
    utils::misc::format_units,
};

use super::{
    payload::{ScanKind, ScanPayload},
    ScanError,
};

/// Follow-up flows that a scan routes to instead of a ledger claim. These
/// open a user-input prompt; they are not claim transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    FoodPurchase,
    MerchPurchase,
    RaffleEntry,
    SponsorQuiz,
}

impl std::fmt::Display for FollowUp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            FollowUp::FoodPurchase => "food purchase",
            FollowUp::MerchPurchase => "merch purchase",
            FollowUp::RaffleEntry => "raffle entry",
            FollowUp::SponsorQuiz => "sponsor quiz",
        };
        write!(f, "{}", s)
    }
}

/// What a single scan ended in. Consumed exactly once by the presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    AlreadyClaimed,
    ScavengerPiece { found: usize, required: usize },
    ScavengerComplete { required: usize, reward: String },
    TokenAward { amount: f64 },
    NftAward { name: String, media: String },
    FollowUpPrompt { follow_up: FollowUp, id: String },
    TransferPrompt { receiver: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScavengerProgress {
    pub found_before: usize,
    pub required: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimDecision {
    AlreadyClaimed,
    Submit { scavenger: Option<ScavengerProgress> },
}

/// Decides whether a token/nft scan still needs a claim transaction, from
/// claim history fetched fresh off the ledger. The history list holds
/// scavenger piece ids for hunt drops and the drop id itself otherwise, so
/// membership is tested against whichever id applies to this scan.
pub fn decide_claim(payload: &ScanPayload, info: &DropInfo, claimed: &[String]) -> ClaimDecision {
    match &payload.scavenger_id {
        Some(scavenger_id) => {
            if claimed.iter().any(|id| id == scavenger_id) {
                return ClaimDecision::AlreadyClaimed;
            }

            let (found_before, required) = match &info.scavenger_ids {
                Some(piece_ids) => (
                    claimed.iter().filter(|id| piece_ids.contains(id)).count(),
                    piece_ids.len(),
                ),
                // Drop metadata lost its piece list; treat every recorded
                // claim as a found piece.
                None => (claimed.len(), 0),
            };

            ClaimDecision::Submit {
                scavenger: Some(ScavengerProgress {
                    found_before,
                    required,
                }),
            }
        }
        None => {
            if claimed.iter().any(|id| *id == payload.id) {
                ClaimDecision::AlreadyClaimed
            } else {
                ClaimDecision::Submit { scavenger: None }
            }
        }
    }
}

/// Shapes the outcome of a submitted claim. Scavenger hunts complete exactly
/// when this piece brings the count to the required total.
pub fn shape_outcome(
    info: &DropInfo,
    receipt: &ClaimReceipt,
    scavenger: Option<ScavengerProgress>,
    token_decimals: u32,
) -> eyre::Result<ClaimOutcome> {
    if let Some(progress) = scavenger {
        let found = progress.found_before + 1;

        if found >= progress.required {
            return Ok(ClaimOutcome::ScavengerComplete {
                required: progress.required,
                reward: info.name.clone(),
            });
        }

        return Ok(ClaimOutcome::ScavengerPiece {
            found,
            required: progress.required,
        });
    }

    let token_amount = receipt
        .token_amount
        .as_deref()
        .or(info.token_amount.as_deref());

    if let Some(raw_amount) = token_amount {
        return Ok(ClaimOutcome::TokenAward {
            amount: format_units(raw_amount, token_decimals)?,
        });
    }

    let (name, media) = receipt
        .nft
        .as_ref()
        .or(info.nft.as_ref())
        .map(|nft| (nft.name.clone(), nft.media.clone()))
        .unwrap_or_else(|| (info.name.clone(), String::new()));

    Ok(ClaimOutcome::NftAward { name, media })
}

/// Handles one scanned code end to end: decode, check claim history,
/// dispatch by kind. Malformed codes and self-transfers fail before any
/// network call is made.
pub async fn process_scan(
    ledger: &LedgerClient,
    account_id: &str,
    raw: &str,
    token_decimals: u32,
) -> Result<ClaimOutcome, ScanError> {
    let payload: ScanPayload = raw.trim().parse()?;

    match payload.kind {
        ScanKind::Token | ScanKind::Nft => {
            let info = ledger
                .drop_info(&payload.id)
                .await
                .map_err(ScanError::Remote)?;
            let claimed = ledger
                .claims_for(account_id, &payload.id)
                .await
                .map_err(ScanError::Remote)?;

            tracing::debug!(
                "Drop `{}`: {} prior claim(s) for `{}`",
                info.drop_id,
                claimed.len(),
                account_id
            );

            match decide_claim(&payload, &info, &claimed) {
                ClaimDecision::AlreadyClaimed => Ok(ClaimOutcome::AlreadyClaimed),
                ClaimDecision::Submit { scavenger } => {
                    let receipt = ledger
                        .claim_drop(account_id, &payload.id, payload.scavenger_id.as_deref())
                        .await
                        .map_err(ScanError::Remote)?;

                    shape_outcome(&info, &receipt, scavenger, token_decimals)
                        .map_err(ScanError::Remote)
                }
            }
        }
        ScanKind::Food => Ok(ClaimOutcome::FollowUpPrompt {
            follow_up: FollowUp::FoodPurchase,
            id: payload.id,
        }),
        ScanKind::Merch => Ok(ClaimOutcome::FollowUpPrompt {
            follow_up: FollowUp::MerchPurchase,
            id: payload.id,
        }),
        ScanKind::Raffle => Ok(ClaimOutcome::FollowUpPrompt {
            follow_up: FollowUp::RaffleEntry,
            id: payload.id,
        }),
        ScanKind::Sponsor => Ok(ClaimOutcome::FollowUpPrompt {
            follow_up: FollowUp::SponsorQuiz,
            id: payload.id,
        }),
        ScanKind::Profile => {
            if payload.id == account_id {
                Err(ScanError::SelfTransfer)
            } else {
                Ok(ClaimOutcome::TransferPrompt {
                    receiver: payload.id,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn drop_info(scavenger_ids: Option<Vec<&str>>) -> DropInfo {
        DropInfo {
            drop_id: "drop123".to_string(),
            name: "Keynote POAP".to_string(),
            token_amount: None,
            nft: None,
            scavenger_ids: scavenger_ids
                .map(|ids| ids.into_iter().map(str::to_string).collect()),
        }
    }

    fn payload(raw: &str) -> ScanPayload {
        raw.parse().unwrap()
    }

    fn claimed(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn offline_ledger() -> LedgerClient {
        // Nothing listens here; any request would error out immediately.
        let config = Config {
            ledger_api_url: "http://127.0.0.1:9".to_string(),
            factory_account: "conf.factory".to_string(),
            token_symbol: "SOV".to_string(),
            token_decimals: 18,
        };

        LedgerClient::new(&config)
    }

    #[test]
    fn plain_claim_short_circuits_on_drop_id() {
        let decision = decide_claim(
            &payload("token:drop123"),
            &drop_info(None),
            &claimed(&["drop123"]),
        );

        assert_eq!(decision, ClaimDecision::AlreadyClaimed);
    }

    #[test]
    fn scavenger_claim_short_circuits_on_piece_id() {
        let decision = decide_claim(
            &payload("token:drop123:scav9"),
            &drop_info(Some(vec!["scav8", "scav9"])),
            &claimed(&["scav9"]),
        );

        assert_eq!(decision, ClaimDecision::AlreadyClaimed);
    }

    #[test]
    fn scavenger_claim_ignores_parent_drop_id_in_history() {
        // The history list is shared between both id spaces; only the piece
        // id marks a scavenger claim as done.
        let decision = decide_claim(
            &payload("token:drop123:scav9"),
            &drop_info(Some(vec!["scav8", "scav9"])),
            &claimed(&["drop123"]),
        );

        assert_eq!(
            decision,
            ClaimDecision::Submit {
                scavenger: Some(ScavengerProgress {
                    found_before: 0,
                    required: 2,
                }),
            }
        );
    }

    #[test]
    fn unclaimed_drop_submits() {
        let decision = decide_claim(&payload("token:drop123"), &drop_info(None), &claimed(&[]));

        assert_eq!(decision, ClaimDecision::Submit { scavenger: None });
    }

    #[test]
    fn scavenger_progress_counts_claimed_pieces() {
        let decision = decide_claim(
            &payload("token:drop123:scav3"),
            &drop_info(Some(vec!["scav1", "scav2", "scav3", "scav4"])),
            &claimed(&["scav1", "scav2"]),
        );

        assert_eq!(
            decision,
            ClaimDecision::Submit {
                scavenger: Some(ScavengerProgress {
                    found_before: 2,
                    required: 4,
                }),
            }
        );
    }

    #[test]
    fn scavenger_piece_below_required_is_progress() {
        let receipt = ClaimReceipt {
            token_amount: None,
            nft: None,
        };

        let outcome = shape_outcome(
            &drop_info(Some(vec!["scav1", "scav2", "scav3"])),
            &receipt,
            Some(ScavengerProgress {
                found_before: 0,
                required: 3,
            }),
            18,
        )
        .unwrap();

        assert_eq!(
            outcome,
            ClaimOutcome::ScavengerPiece {
                found: 1,
                required: 3,
            }
        );
    }

    #[test]
    fn final_scavenger_piece_completes_the_hunt() {
        let receipt = ClaimReceipt {
            token_amount: None,
            nft: None,
        };

        let outcome = shape_outcome(
            &drop_info(Some(vec!["scav1", "scav2", "scav3"])),
            &receipt,
            Some(ScavengerProgress {
                found_before: 2,
                required: 3,
            }),
            18,
        )
        .unwrap();

        assert_eq!(
            outcome,
            ClaimOutcome::ScavengerComplete {
                required: 3,
                reward: "Keynote POAP".to_string(),
            }
        );
    }

    #[test]
    fn fungible_receipt_shapes_token_award() {
        let receipt = ClaimReceipt {
            token_amount: Some("5000000000000000000".to_string()),
            nft: None,
        };

        let outcome = shape_outcome(&drop_info(None), &receipt, None, 18).unwrap();

        assert_eq!(outcome, ClaimOutcome::TokenAward { amount: 5.0 });
    }

    #[test]
    fn bare_receipt_falls_back_to_nft_award() {
        let receipt = ClaimReceipt {
            token_amount: None,
            nft: None,
        };

        let outcome = shape_outcome(&drop_info(None), &receipt, None, 18).unwrap();

        assert_eq!(
            outcome,
            ClaimOutcome::NftAward {
                name: "Keynote POAP".to_string(),
                media: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn malformed_code_fails_without_network() {
        let ledger = offline_ledger();

        let result = process_scan(&ledger, "alice.conf", "garbage", 18).await;

        assert!(matches!(result, Err(ScanError::MalformedPayload(_))));
    }

    #[tokio::test]
    async fn self_transfer_is_rejected_without_network() {
        let ledger = offline_ledger();

        let result = process_scan(&ledger, "alice.conf", "profile:alice.conf", 18).await;

        assert!(matches!(result, Err(ScanError::SelfTransfer)));
    }

    #[tokio::test]
    async fn profile_scan_routes_to_transfer_prompt() {
        let ledger = offline_ledger();

        let outcome = process_scan(&ledger, "alice.conf", "profile:bob.conf", 18)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ClaimOutcome::TransferPrompt {
                receiver: "bob.conf".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn food_scan_routes_to_purchase_prompt() {
        let ledger = offline_ledger();

        let outcome = process_scan(&ledger, "alice.conf", "food:vendor7", 18)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ClaimOutcome::FollowUpPrompt {
                follow_up: FollowUp::FoodPurchase,
                id: "vendor7".to_string(),
            }
        );
    }
}
