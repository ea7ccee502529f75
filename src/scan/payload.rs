use std::str::FromStr;

use super::ScanError;

/// Discriminator carried in the first segment of a scanned code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    Token,
    Nft,
    Food,
    Merch,
    Raffle,
    Profile,
    Sponsor,
}

impl ScanKind {
    fn parse(tag: &str) -> Option<Self> {
        let kind = match tag {
            "token" => Self::Token,
            "nft" => Self::Nft,
            "food" => Self::Food,
            "merch" => Self::Merch,
            "raffle" => Self::Raffle,
            "profile" => Self::Profile,
            "sponsor" => Self::Sponsor,
            _ => return None,
        };

        Some(kind)
    }
}

/// A scanned code, decoded once at the boundary from the wire form
/// `<kind>:<id>[:<scavengerId>]`. Identifier segments are taken as-is;
/// bad ids surface later as ledger errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPayload {
    pub kind: ScanKind,
    pub id: String,
    pub scavenger_id: Option<String>,
}

impl FromStr for ScanPayload {
    type Err = ScanError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ScanError::MalformedPayload(raw.to_string());

        let mut segments = raw.splitn(3, ':');

        let kind = segments
            .next()
            .and_then(ScanKind::parse)
            .ok_or_else(malformed)?;

        let id = segments
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(malformed)?
            .to_string();

        let scavenger_id = segments
            .next()
            .filter(|sub| !sub.is_empty())
            .map(str::to_string);

        Ok(Self {
            kind,
            id,
            scavenger_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_drop_code() {
        let payload: ScanPayload = "token:drop123".parse().unwrap();

        assert_eq!(payload.kind, ScanKind::Token);
        assert_eq!(payload.id, "drop123");
        assert!(payload.scavenger_id.is_none());
    }

    #[test]
    fn decodes_scavenger_code() {
        let payload: ScanPayload = "token:drop123:scav9".parse().unwrap();

        assert_eq!(payload.kind, ScanKind::Token);
        assert_eq!(payload.id, "drop123");
        assert_eq!(payload.scavenger_id.as_deref(), Some("scav9"));
    }

    #[test]
    fn decodes_profile_code() {
        let payload: ScanPayload = "profile:alice.near".parse().unwrap();

        assert_eq!(payload.kind, ScanKind::Profile);
        assert_eq!(payload.id, "alice.near");
    }

    #[test]
    fn rejects_single_segment() {
        assert!(matches!(
            "token".parse::<ScanPayload>(),
            Err(ScanError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_empty_id() {
        assert!(matches!(
            "token:".parse::<ScanPayload>(),
            Err(ScanError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(matches!(
            "badge:drop123".parse::<ScanPayload>(),
            Err(ScanError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(matches!(
            "".parse::<ScanPayload>(),
            Err(ScanError::MalformedPayload(_))
        ));
    }
}
