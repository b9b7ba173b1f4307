use std::sync::Arc;

use lucid_authority::{AdminAuthority, AuthorityError};
use lucid_chain_types::{finalization_message, Header, LinkagePolicy, Quorum};
use lucid_crypto::{ProofEvaluator, PublicKeySet, SignatureVerifier, VerifierBackend};
use lucid_db_types::{traits::HeaderDatabase, DbResult};
use lucid_identifiers::{Identity, SequenceId};
use lucid_status::{EventSink, LedgerEvent};
use parking_lot::{Mutex, RwLock};
use tracing::*;

use crate::{
    errors::{FinalizeError, RegistryError},
    ValidatorRegistry,
};

/// Orchestrates finalization: authorization, signature check, append, event.
///
/// A `finalize` call holds read locks on the registry and verifier for its
/// whole duration, events included, so admin changes land strictly between
/// finalizations and the event stream follows the commit order. Under
/// [`LinkagePolicy::Enforced`] the neighbour checks and the append also run
/// under `linkage_guard`.
#[derive(Debug)]
pub struct ConsensusCoordinator {
    authority: Arc<AdminAuthority>,
    registry: RwLock<ValidatorRegistry>,
    verifier: RwLock<SignatureVerifier>,
    header_db: Arc<dyn HeaderDatabase>,
    events: Arc<dyn EventSink>,
    linkage: LinkagePolicy,
    linkage_guard: Mutex<()>,
}

impl ConsensusCoordinator {
    pub fn new(
        authority: Arc<AdminAuthority>,
        registry: ValidatorRegistry,
        verifier: SignatureVerifier,
        header_db: Arc<dyn HeaderDatabase>,
        events: Arc<dyn EventSink>,
        linkage: LinkagePolicy,
    ) -> Self {
        Self {
            authority,
            registry: RwLock::new(registry),
            verifier: RwLock::new(verifier),
            header_db,
            events,
            linkage,
            linkage_guard: Mutex::new(()),
        }
    }

    /// Commits `header` if `caller` is a registered validator and the header's
    /// proof verifies against `keys`.
    pub fn finalize(
        &self,
        caller: &Identity,
        header: Header,
        keys: &PublicKeySet,
    ) -> Result<(), FinalizeError> {
        let sequence_id = header.sequence_id();
        let span = debug_span!("finalize", %sequence_id, %caller);
        let _g = span.enter();

        let res = self.finalize_inner(caller, &header, keys);
        if let Err(e) = &res {
            warn!(err = %e, class = %e.class(), "rejected header");
        }
        res
    }

    fn finalize_inner(
        &self,
        caller: &Identity,
        header: &Header,
        keys: &PublicKeySet,
    ) -> Result<(), FinalizeError> {
        let registry = self.registry.read();
        let verifier = self.verifier.read();
        let sequence_id = header.sequence_id();

        if !registry.is_member(caller) {
            return Err(FinalizeError::UnauthorizedSequencer(*caller));
        }

        let message = finalization_message(sequence_id, header.current_hash());
        if !verifier.verify(keys, message.as_slice(), header.proof())? {
            return Err(FinalizeError::SignatureInvalid(sequence_id));
        }

        match self.linkage {
            LinkagePolicy::Informational => self.append(header)?,
            LinkagePolicy::Enforced => {
                let _linked = self.linkage_guard.lock();
                self.check_linkage(header)?;
                self.append(header)?;
            }
        }

        info!(current_hash = %header.current_hash(), "finalized header");
        self.events.emit(LedgerEvent::Finalized {
            sequence_id,
            current_hash: *header.current_hash(),
        });
        Ok(())
    }

    fn append(&self, header: &Header) -> Result<(), FinalizeError> {
        if !self.header_db.try_put_header(header)? {
            return Err(FinalizeError::HeaderExists(header.sequence_id()));
        }
        Ok(())
    }

    /// Checks the header against whichever neighbours are already committed.
    /// Absent neighbours are skipped so out-of-order commits stay legal.
    fn check_linkage(&self, header: &Header) -> Result<(), FinalizeError> {
        let sequence_id = header.sequence_id();

        if let Some(prev_seq) = sequence_id.checked_sub(1) {
            match self.header_db.get_header(prev_seq)? {
                Some(prev) if prev.current_hash() != header.previous_hash() => {
                    return Err(FinalizeError::PreviousHashMismatch {
                        sequence_id,
                        expected: *prev.current_hash(),
                        found: *header.previous_hash(),
                    });
                }
                Some(_) => {}
                None => trace!(%prev_seq, "predecessor not committed, skipping check"),
            }
        }

        if let Some(next_seq) = sequence_id.checked_add(1) {
            match self.header_db.get_header(next_seq)? {
                Some(next) if next.previous_hash() != header.current_hash() => {
                    return Err(FinalizeError::PreviousHashMismatch {
                        sequence_id: next_seq,
                        expected: *header.current_hash(),
                        found: *next.previous_hash(),
                    });
                }
                Some(_) => {}
                None => trace!(%next_seq, "successor not committed, skipping check"),
            }
        }
        Ok(())
    }

    pub fn add_member(&self, actor: &Identity, member: Identity) -> Result<(), RegistryError> {
        self.authority.ensure_admin(actor)?;
        let mut registry = self.registry.write();
        registry.add_member(member)?;
        info!(%member, "validator added");
        self.events.emit(LedgerEvent::MemberAdded { member });
        Ok(())
    }

    pub fn remove_member(
        &self,
        actor: &Identity,
        member: &Identity,
    ) -> Result<(), RegistryError> {
        self.authority.ensure_admin(actor)?;
        let mut registry = self.registry.write();
        registry.remove_member(member)?;
        info!(%member, "validator removed");
        self.events.emit(LedgerEvent::MemberRemoved { member: *member });
        Ok(())
    }

    /// Replaces the quorum rule with `numerator / denominator`.
    pub fn set_quorum(
        &self,
        actor: &Identity,
        numerator: u32,
        denominator: u32,
    ) -> Result<(), RegistryError> {
        self.authority.ensure_admin(actor)?;
        let quorum = Quorum::try_new(numerator, denominator)?;
        let mut registry = self.registry.write();
        registry.set_quorum(quorum);
        info!(%quorum, "quorum changed");
        self.events.emit(LedgerEvent::QuorumChanged { quorum });
        Ok(())
    }

    /// Turns the bootstrap override on or off.
    ///
    /// While on, every proof is accepted. Headers committed in that window
    /// stay committed after it is turned off.
    pub fn set_override(&self, actor: &Identity, enabled: bool) -> Result<(), AuthorityError> {
        self.authority.ensure_admin(actor)?;
        let mut verifier = self.verifier.write();
        verifier.set_override(enabled);
        if enabled {
            warn!(%actor, "verifier override enabled");
        } else {
            info!(%actor, "verifier override disabled");
        }
        self.events.emit(LedgerEvent::VerifierOverrideToggled {
            enabled,
            actor: *actor,
        });
        Ok(())
    }

    /// Re-points native verification at `evaluator`.
    pub fn set_verifier_backend(
        &self,
        actor: &Identity,
        evaluator: Arc<dyn ProofEvaluator>,
    ) -> Result<(), AuthorityError> {
        self.authority.ensure_admin(actor)?;
        let backend = evaluator.name();
        let mut verifier = self.verifier.write();
        verifier.set_evaluator(evaluator);
        info!(%actor, %backend, "verifier backend changed");
        self.events.emit(LedgerEvent::VerifierBackendChanged {
            backend: backend.to_owned(),
            actor: *actor,
        });
        Ok(())
    }

    pub fn is_member(&self, id: &Identity) -> bool {
        self.registry.read().is_member(id)
    }

    pub fn member_count(&self) -> usize {
        self.registry.read().member_count()
    }

    pub fn members(&self) -> Vec<Identity> {
        self.registry.read().members()
    }

    pub fn quorum(&self) -> Quorum {
        self.registry.read().quorum()
    }

    pub fn required_signers(&self) -> usize {
        self.registry.read().required_signers()
    }

    pub fn verifier_backend(&self) -> VerifierBackend {
        self.verifier.read().backend()
    }

    pub fn override_enabled(&self) -> bool {
        self.verifier.read().override_enabled()
    }

    pub fn linkage_policy(&self) -> LinkagePolicy {
        self.linkage
    }

    pub fn get_header(&self, sequence_id: SequenceId) -> DbResult<Option<Header>> {
        self.header_db.get_header(sequence_id)
    }

    pub fn latest_sequence(&self) -> DbResult<Option<SequenceId>> {
        self.header_db.get_latest_sequence()
    }

    /// The committed header with the highest sequence id.
    pub fn latest_header(&self) -> DbResult<Option<Header>> {
        match self.header_db.get_latest_sequence()? {
            Some(seq) => self.header_db.get_header(seq),
            None => Ok(None),
        }
    }

    pub fn header_count(&self) -> DbResult<u64> {
        self.header_db.get_header_count()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Barrier, OnceLock, Weak},
        thread,
        time::Duration,
    };

    use lucid_authority::ErrorClass;
    use lucid_crypto::{
        test_utils::{build_proof, key_set},
        IndexedEcdsaEvaluator,
    };
    use lucid_db_types::stubs::StubHeaderDb;
    use lucid_identifiers::Buf32;
    use lucid_status::EventLog;
    use lucid_test_utils::fixtures::{hash, identity};
    use proptest::prelude::*;

    use super::*;

    const ADMIN: u8 = 0xad;
    const SEQUENCER: u8 = 1;

    struct Harness {
        coord: ConsensusCoordinator,
        events: Arc<EventLog>,
        keys: PublicKeySet,
    }

    fn three_members() -> ValidatorRegistry {
        ValidatorRegistry::new([identity(1), identity(2), identity(3)], Quorum::TWO_THIRDS).unwrap()
    }

    fn harness_over(
        linkage: LinkagePolicy,
        verifier: SignatureVerifier,
        header_db: Arc<dyn HeaderDatabase>,
    ) -> Harness {
        let events = Arc::new(EventLog::new());
        let coord = ConsensusCoordinator::new(
            Arc::new(AdminAuthority::new(identity(ADMIN))),
            three_members(),
            verifier,
            header_db,
            events.clone(),
            linkage,
        );
        Harness {
            coord,
            events,
            keys: key_set(&[1, 2, 3], 2),
        }
    }

    fn harness_with(linkage: LinkagePolicy, verifier: SignatureVerifier) -> Harness {
        harness_over(linkage, verifier, Arc::new(StubHeaderDb::new()))
    }

    fn harness(linkage: LinkagePolicy) -> Harness {
        harness_with(
            linkage,
            SignatureVerifier::new(Arc::new(IndexedEcdsaEvaluator)),
        )
    }

    /// Header at `seq` carrying a valid 2-of-3 proof.
    fn signed_header(seq: SequenceId, prev: Buf32, cur: Buf32) -> Header {
        let msg = finalization_message(seq, &cur);
        let proof = build_proof(msg.as_bytes(), &[(0, 1), (2, 3)]);
        Header::new(seq, 10, prev, cur, identity(SEQUENCER), proof)
    }

    #[test]
    fn test_finalize_commits_and_emits() {
        let h = harness(LinkagePolicy::Informational);
        let header = signed_header(5, Buf32::zero(), hash(5));

        h.coord
            .finalize(&identity(SEQUENCER), header.clone(), &h.keys)
            .unwrap();

        assert_eq!(h.coord.get_header(5).unwrap(), Some(header));
        assert_eq!(h.coord.latest_sequence().unwrap(), Some(5));
        assert_eq!(
            h.events.events(),
            vec![LedgerEvent::Finalized {
                sequence_id: 5,
                current_hash: hash(5)
            }]
        );
    }

    #[test]
    fn test_non_member_rejected_first() {
        let h = harness(LinkagePolicy::Informational);
        // Garbage proof, but authorization is checked before anything else.
        let header = Header::new(1, 0, Buf32::zero(), hash(1), identity(9), vec![0xff]);

        let err = h
            .coord
            .finalize(&identity(9), header, &h.keys)
            .unwrap_err();
        assert_eq!(err, FinalizeError::UnauthorizedSequencer(identity(9)));
        assert_eq!(err.class(), ErrorClass::Authorization);
        assert_eq!(h.coord.latest_sequence().unwrap(), None);
        assert!(h.events.is_empty());
    }

    #[test]
    fn test_wrong_message_is_signature_invalid() {
        let h = harness(LinkagePolicy::Informational);
        // Proof signs sequence 6 but the header claims sequence 7.
        let good = signed_header(6, Buf32::zero(), hash(6));
        let forged = Header::new(
            7,
            10,
            Buf32::zero(),
            hash(6),
            identity(SEQUENCER),
            good.proof().to_vec(),
        );

        let err = h
            .coord
            .finalize(&identity(SEQUENCER), forged, &h.keys)
            .unwrap_err();
        assert_eq!(err, FinalizeError::SignatureInvalid(7));
        assert_eq!(err.class(), ErrorClass::Integrity);
        assert_eq!(h.coord.get_header(7).unwrap(), None);
    }

    #[test]
    fn test_garbage_proof_is_format_error() {
        let h = harness(LinkagePolicy::Informational);
        let header = Header::new(
            1,
            0,
            Buf32::zero(),
            hash(1),
            identity(SEQUENCER),
            b"garbage".to_vec(),
        );

        let err = h
            .coord
            .finalize(&identity(SEQUENCER), header, &h.keys)
            .unwrap_err();
        assert!(matches!(err, FinalizeError::InvalidProofFormat(_)));
        assert_eq!(err.class(), ErrorClass::Validation);
    }

    #[test]
    fn test_duplicate_sequence_rejected() {
        let h = harness(LinkagePolicy::Informational);
        let header = signed_header(5, Buf32::zero(), hash(5));

        h.coord
            .finalize(&identity(SEQUENCER), header.clone(), &h.keys)
            .unwrap();
        let err = h
            .coord
            .finalize(&identity(2), header, &h.keys)
            .unwrap_err();
        assert_eq!(err, FinalizeError::HeaderExists(5));
        assert_eq!(err.class(), ErrorClass::Conflict);
        assert_eq!(h.coord.latest_sequence().unwrap(), Some(5));
        assert_eq!(h.events.len(), 1);
    }

    #[test]
    fn test_enforced_linkage() {
        let h = harness(LinkagePolicy::Enforced);
        let sequencer = identity(SEQUENCER);

        // No predecessor committed: accepted.
        h.coord
            .finalize(&sequencer, signed_header(10, hash(0xee), hash(10)), &h.keys)
            .unwrap();

        let err = h
            .coord
            .finalize(&sequencer, signed_header(11, hash(0xee), hash(11)), &h.keys)
            .unwrap_err();
        assert_eq!(
            err,
            FinalizeError::PreviousHashMismatch {
                sequence_id: 11,
                expected: hash(10),
                found: hash(0xee),
            }
        );

        h.coord
            .finalize(&sequencer, signed_header(11, hash(10), hash(11)), &h.keys)
            .unwrap();
        assert_eq!(h.coord.latest_header().unwrap().unwrap().sequence_id(), 11);
    }

    #[test]
    fn test_informational_linkage_accepts_anything() {
        let h = harness(LinkagePolicy::Informational);
        let sequencer = identity(SEQUENCER);
        h.coord
            .finalize(&sequencer, signed_header(1, Buf32::zero(), hash(1)), &h.keys)
            .unwrap();
        h.coord
            .finalize(&sequencer, signed_header(2, hash(0x77), hash(2)), &h.keys)
            .unwrap();
    }

    #[test]
    fn test_override_window() {
        let h = harness(LinkagePolicy::Informational);
        let admin = identity(ADMIN);
        let sequencer = identity(SEQUENCER);
        let garbage = |seq| Header::new(seq, 0, Buf32::zero(), hash(1), sequencer, vec![0; 3]);

        h.coord.set_override(&admin, true).unwrap();
        assert_eq!(h.coord.verifier_backend(), VerifierBackend::AlwaysTrue);
        h.coord.finalize(&sequencer, garbage(1), &h.keys).unwrap();

        h.coord.set_override(&admin, false).unwrap();
        let err = h
            .coord
            .finalize(&sequencer, garbage(2), &h.keys)
            .unwrap_err();
        // A zero count followed by stray bytes does not decode as a proof.
        assert!(matches!(err, FinalizeError::InvalidProofFormat(_)), "{err:?}");

        // The header committed under the override stays committed.
        assert!(h.coord.get_header(1).unwrap().is_some());
        let toggles: Vec<_> = h
            .events
            .events()
            .into_iter()
            .filter(|e| matches!(e, LedgerEvent::VerifierOverrideToggled { .. }))
            .collect();
        assert_eq!(toggles.len(), 2);
    }

    #[test]
    fn test_admin_ops_require_admin() {
        let h = harness(LinkagePolicy::Informational);
        let stranger = identity(0x55);

        let err = h.coord.add_member(&stranger, identity(4)).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Authorization);
        assert!(h.coord.remove_member(&stranger, &identity(1)).is_err());
        assert!(h.coord.set_quorum(&stranger, 1, 2).is_err());
        assert!(h.coord.set_override(&stranger, true).is_err());
        assert!(h
            .coord
            .set_verifier_backend(&stranger, Arc::new(IndexedEcdsaEvaluator))
            .is_err());

        assert!(!h.coord.override_enabled());
        assert_eq!(h.coord.member_count(), 3);
        assert!(h.events.is_empty());
    }

    #[test]
    fn test_membership_admin() {
        let h = harness(LinkagePolicy::Informational);
        let admin = identity(ADMIN);

        h.coord.add_member(&admin, identity(4)).unwrap();
        assert!(h.coord.is_member(&identity(4)));
        assert_eq!(h.coord.required_signers(), 3);

        h.coord.remove_member(&admin, &identity(1)).unwrap();
        h.coord.remove_member(&admin, &identity(2)).unwrap();
        h.coord.remove_member(&admin, &identity(3)).unwrap();
        let err = h.coord.remove_member(&admin, &identity(4)).unwrap_err();
        assert_eq!(err, RegistryError::LastMemberProtected(identity(4)));
        assert_eq!(h.coord.members(), vec![identity(4)]);

        // A removed member can no longer finalize.
        let err = h
            .coord
            .finalize(
                &identity(1),
                signed_header(1, Buf32::zero(), hash(1)),
                &h.keys,
            )
            .unwrap_err();
        assert_eq!(err, FinalizeError::UnauthorizedSequencer(identity(1)));

        let events = h.events.events();
        assert_eq!(
            events[0],
            LedgerEvent::MemberAdded {
                member: identity(4)
            }
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_set_quorum() {
        let h = harness(LinkagePolicy::Informational);
        let admin = identity(ADMIN);

        h.coord.set_quorum(&admin, 1, 1).unwrap();
        assert_eq!(h.coord.required_signers(), 3);

        let err = h.coord.set_quorum(&admin, 4, 3).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidQuorum(_)));
        assert_eq!(err.class(), ErrorClass::Validation);
        assert_eq!(h.coord.quorum(), Quorum::try_new(1, 1).unwrap());
    }

    #[test]
    fn test_unconfigured_verifier_then_backend_change() {
        let h = harness_with(LinkagePolicy::Informational, SignatureVerifier::unconfigured());
        let sequencer = identity(SEQUENCER);
        let header = signed_header(3, Buf32::zero(), hash(3));

        let err = h
            .coord
            .finalize(&sequencer, header.clone(), &h.keys)
            .unwrap_err();
        assert_eq!(err, FinalizeError::SignatureInvalid(3));

        h.coord
            .set_verifier_backend(&identity(ADMIN), Arc::new(IndexedEcdsaEvaluator))
            .unwrap();
        h.coord.finalize(&sequencer, header, &h.keys).unwrap();

        assert!(h.events.events().contains(&LedgerEvent::VerifierBackendChanged {
            backend: IndexedEcdsaEvaluator::NAME.to_owned(),
            actor: identity(ADMIN),
        }));
    }

    #[test]
    fn test_enforced_linkage_checks_committed_successor() {
        let h = harness(LinkagePolicy::Enforced);
        let sequencer = identity(SEQUENCER);

        h.coord
            .finalize(&sequencer, signed_header(11, hash(0xee), hash(11)), &h.keys)
            .unwrap();

        let err = h
            .coord
            .finalize(&sequencer, signed_header(10, hash(9), hash(10)), &h.keys)
            .unwrap_err();
        assert_eq!(
            err,
            FinalizeError::PreviousHashMismatch {
                sequence_id: 11,
                expected: hash(10),
                found: hash(0xee),
            }
        );
        assert_eq!(h.coord.get_header(10).unwrap(), None);

        h.coord
            .finalize(&sequencer, signed_header(10, hash(9), hash(0xee)), &h.keys)
            .unwrap();
        assert_eq!(h.coord.header_count().unwrap(), 2);
    }

    /// Stub header store whose reads stall, widening the window between a
    /// linkage check and the append.
    #[derive(Debug, Default)]
    struct SlowReadHeaderDb {
        inner: StubHeaderDb,
    }

    impl HeaderDatabase for SlowReadHeaderDb {
        fn try_put_header(&self, header: &Header) -> DbResult<bool> {
            self.inner.try_put_header(header)
        }

        fn get_header(&self, sequence_id: SequenceId) -> DbResult<Option<Header>> {
            let header = self.inner.get_header(sequence_id)?;
            thread::sleep(Duration::from_millis(100));
            Ok(header)
        }

        fn get_latest_sequence(&self) -> DbResult<Option<SequenceId>> {
            self.inner.get_latest_sequence()
        }

        fn get_headers_range(&self, start: SequenceId, end: SequenceId) -> DbResult<Vec<Header>> {
            self.inner.get_headers_range(start, end)
        }

        fn get_header_count(&self) -> DbResult<u64> {
            self.inner.get_header_count()
        }
    }

    #[test]
    fn test_enforced_linkage_holds_under_concurrent_neighbours() {
        let h = harness_over(
            LinkagePolicy::Enforced,
            SignatureVerifier::new(Arc::new(IndexedEcdsaEvaluator)),
            Arc::new(SlowReadHeaderDb::default()),
        );
        let barrier = Barrier::new(2);

        let (r10, r11) = thread::scope(|s| {
            let t11 = s.spawn(|| {
                barrier.wait();
                h.coord.finalize(
                    &identity(2),
                    signed_header(11, hash(0xee), hash(11)),
                    &h.keys,
                )
            });
            barrier.wait();
            let r10 = h.coord.finalize(
                &identity(SEQUENCER),
                signed_header(10, hash(9), hash(10)),
                &h.keys,
            );
            (r10, t11.join().unwrap())
        });

        assert_eq!(
            usize::from(r10.is_ok()) + usize::from(r11.is_ok()),
            1,
            "{r10:?} {r11:?}"
        );
        let loser = r10.err().or(r11.err()).unwrap();
        assert!(
            matches!(loser, FinalizeError::PreviousHashMismatch { .. }),
            "{loser:?}"
        );
        assert_eq!(h.coord.header_count().unwrap(), 1);
    }

    /// Records, next to each event, whether the verifier lock was held when
    /// the event was emitted.
    #[derive(Debug, Default)]
    struct LockAwareSink {
        coord: OnceLock<Weak<ConsensusCoordinator>>,
        seen: Mutex<Vec<(LedgerEvent, bool)>>,
    }

    impl EventSink for LockAwareSink {
        fn emit(&self, event: LedgerEvent) {
            let held = self
                .coord
                .get()
                .and_then(Weak::upgrade)
                .is_some_and(|coord| coord.verifier.try_write().is_none());
            self.seen.lock().push((event, held));
        }
    }

    #[test]
    fn test_verifier_events_emitted_under_lock() {
        let sink = Arc::new(LockAwareSink::default());
        let coord = Arc::new(ConsensusCoordinator::new(
            Arc::new(AdminAuthority::new(identity(ADMIN))),
            three_members(),
            SignatureVerifier::new(Arc::new(IndexedEcdsaEvaluator)),
            Arc::new(StubHeaderDb::new()),
            sink.clone(),
            LinkagePolicy::Informational,
        ));
        sink.coord.set(Arc::downgrade(&coord)).unwrap();
        let keys = key_set(&[1, 2, 3], 2);

        coord.set_override(&identity(ADMIN), true).unwrap();
        coord
            .finalize(
                &identity(SEQUENCER),
                Header::new(1, 0, Buf32::zero(), hash(1), identity(SEQUENCER), vec![]),
                &keys,
            )
            .unwrap();
        coord.set_override(&identity(ADMIN), false).unwrap();

        let seen = sink.seen.lock();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|(_, held)| *held), "{seen:?}");
        assert!(matches!(seen[1].0, LedgerEvent::Finalized { sequence_id: 1, .. }));
    }

    proptest! {
        #[test]
        fn proptest_latest_is_max_committed(seqs in proptest::collection::vec(0u64..500, 1..24)) {
            let h = harness(LinkagePolicy::Informational);
            h.coord.set_override(&identity(ADMIN), true).unwrap();

            for seq in &seqs {
                let header = Header::new(*seq, 0, Buf32::zero(), hash(1), identity(SEQUENCER), vec![]);
                // Repeats fail with HeaderExists, which must not move the tip.
                let _ = h.coord.finalize(&identity(SEQUENCER), header, &h.keys);
            }

            let max = seqs.iter().copied().max();
            prop_assert_eq!(h.coord.latest_sequence().unwrap(), max);
        }
    }
}
