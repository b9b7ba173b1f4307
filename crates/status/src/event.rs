use lucid_chain_types::Quorum;
use lucid_identifiers::{Amount, Buf32, Identity, SequenceId, SourceTxId};
use serde::{Deserialize, Serialize};

/// Observable outcome of a successful state transition.
///
/// Published only after the transition is durable, so consumers never see
/// an event for a change that was rolled back. Amounts serialize as decimal
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    Finalized {
        sequence_id: SequenceId,
        current_hash: Buf32,
    },
    BridgedOut {
        account: Identity,
        #[serde(with = "lucid_identifiers::amount_serde")]
        amount: Amount,
        destination: String,
    },
    BridgedIn {
        account: Identity,
        #[serde(with = "lucid_identifiers::amount_serde")]
        amount: Amount,
        source_tx_id: SourceTxId,
    },
    RelayerAuthorized {
        relayer: Identity,
    },
    RelayerDeauthorized {
        relayer: Identity,
    },
    MemberAdded {
        member: Identity,
    },
    MemberRemoved {
        member: Identity,
    },
    QuorumChanged {
        quorum: Quorum,
    },
    VerifierOverrideToggled {
        enabled: bool,
        actor: Identity,
    },
    VerifierBackendChanged {
        backend: String,
        actor: Identity,
    },
    AdminTransferred {
        previous: Identity,
        new: Identity,
    },
}

impl LedgerEvent {
    /// Short name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerEvent::Finalized { .. } => "finalized",
            LedgerEvent::BridgedOut { .. } => "bridged_out",
            LedgerEvent::BridgedIn { .. } => "bridged_in",
            LedgerEvent::RelayerAuthorized { .. } => "relayer_authorized",
            LedgerEvent::RelayerDeauthorized { .. } => "relayer_deauthorized",
            LedgerEvent::MemberAdded { .. } => "member_added",
            LedgerEvent::MemberRemoved { .. } => "member_removed",
            LedgerEvent::QuorumChanged { .. } => "quorum_changed",
            LedgerEvent::VerifierOverrideToggled { .. } => "verifier_override_toggled",
            LedgerEvent::VerifierBackendChanged { .. } => "verifier_backend_changed",
            LedgerEvent::AdminTransferred { .. } => "admin_transferred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_is_tagged() {
        let ev = LedgerEvent::BridgedIn {
            account: Identity::from_bytes([1; 20]),
            amount: 100,
            source_tx_id: SourceTxId::from("tx-42"),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], ev.kind());
        assert_eq!(json["amount"], "100");

        let back: LedgerEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn test_bridged_out_json_roundtrip_past_u64() {
        let ev = LedgerEvent::BridgedOut {
            account: Identity::from_bytes([2; 20]),
            amount: u128::from(u64::MAX) + 1,
            destination: "other-chain:bob".to_string(),
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains(r#""amount":"18446744073709551616""#), "{json}");

        let back: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }
}
