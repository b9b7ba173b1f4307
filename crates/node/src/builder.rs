use std::sync::Arc;

use anyhow::Context;
use lucid_authority::AdminAuthority;
use lucid_bridge::{BridgeLedger, InMemoryTokenLedger, RelayerSet, TokenLedger};
use lucid_config::Config;
use lucid_consensus_logic::{ConsensusCoordinator, ValidatorRegistry};
use lucid_crypto::{IndexedEcdsaEvaluator, ProofEvaluator, SignatureVerifier};
use lucid_db_types::traits::DatabaseBackend;
use lucid_status::{BroadcastEventSink, EventSink, MultiSink, TracingEventSink};
use tracing::*;

use crate::LucidCore;

/// Default capacity of the broadcast channel subscribers read events from.
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Assembles a [`LucidCore`] from configuration and collaborators.
#[derive(Debug)]
pub struct CoreBuilder {
    config: Config,
    token: Option<Arc<dyn TokenLedger>>,
    evaluator: Option<Arc<dyn ProofEvaluator>>,
    sinks: Vec<Arc<dyn EventSink>>,
    event_channel_capacity: usize,
}

impl CoreBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            token: None,
            evaluator: None,
            sinks: Vec::new(),
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }

    /// Authoritative token ledger. Defaults to an empty in-memory one.
    pub fn with_token_ledger(mut self, token: Arc<dyn TokenLedger>) -> Self {
        self.token = Some(token);
        self
    }

    /// Native proof evaluator. Defaults to [`IndexedEcdsaEvaluator`].
    pub fn with_evaluator(mut self, evaluator: Arc<dyn ProofEvaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Extra sink that receives every event after the built-in ones.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn with_event_channel_capacity(mut self, capacity: usize) -> Self {
        self.event_channel_capacity = capacity;
        self
    }

    pub fn build(self, backend: &impl DatabaseBackend) -> anyhow::Result<LucidCore> {
        let CoreBuilder {
            config,
            token,
            evaluator,
            sinks,
            event_channel_capacity,
        } = self;

        config.validate().context("invalid config")?;

        let authority = Arc::new(AdminAuthority::new(config.consensus.admin));

        let broadcast = Arc::new(BroadcastEventSink::new(event_channel_capacity));
        let mut events = MultiSink::new(vec![
            Arc::new(TracingEventSink),
            broadcast.clone(),
        ]);
        for sink in sinks {
            events.push(sink);
        }
        let events: Arc<dyn EventSink> = Arc::new(events);

        let quorum = config.consensus.quorum()?;
        let registry = ValidatorRegistry::new(config.consensus.validators.iter().copied(), quorum)
            .context("bootstrap validator registry")?;

        let evaluator = evaluator.unwrap_or_else(|| Arc::new(IndexedEcdsaEvaluator));
        let consensus = ConsensusCoordinator::new(
            authority.clone(),
            registry,
            SignatureVerifier::new(evaluator),
            backend.header_db(),
            events.clone(),
            config.consensus.linkage,
        );
        // Goes through the admin path so the toggle is logged and emitted.
        if config.consensus.verifier_override {
            consensus
                .set_override(&config.consensus.admin, true)
                .context("enable verifier override")?;
        }

        let token = token.unwrap_or_else(|| Arc::new(InMemoryTokenLedger::new()));
        let bridge = BridgeLedger::new(
            authority.clone(),
            RelayerSet::new(config.bridge.relayers.iter().copied()),
            backend.bridge_db(),
            token.clone(),
            events.clone(),
            config.bridge.max_supply,
        );

        info!(
            validators = %config.consensus.validators.len(),
            %quorum,
            linkage = %config.consensus.linkage,
            max_supply = %config.bridge.max_supply,
            "core initialized"
        );

        Ok(LucidCore::new(
            authority, consensus, bridge, token, events, broadcast,
        ))
    }
}
