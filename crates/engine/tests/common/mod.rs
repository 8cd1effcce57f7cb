#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::net::IpAddr;
use std::rc::Rc;

use ipsec_trust_engine as ite;
use ite::{CertificateProperties, EngineError, EngineResult, PolicyKind, PolicyProperties, RawCertificateBytes, TrustVerdict};
use rcgen::{
    BasicConstraints, Certificate, CertificateParams, DistinguishedName, DnType, ExtendedKeyUsagePurpose, IsCa,
    KeyUsagePurpose, SanType,
};

// ===== rcgen fixtures =====

/// DER certificates of a three-level chain, leaf first.
pub struct TestChain {
    pub leaf: Vec<u8>,
    pub intermediate: Vec<u8>,
    pub root: Vec<u8>,
}

impl TestChain {
    pub fn presented(&self) -> Vec<&[u8]> {
        vec![self.leaf.as_slice(), self.intermediate.as_slice(), self.root.as_slice()]
    }
}

fn named(cn: &str, sans: Vec<String>) -> CertificateParams {
    let mut params = CertificateParams::new(sans);
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, cn);
    params.distinguished_name = dn;
    params
}

fn ca_params(cn: &str) -> CertificateParams {
    let mut params = named(cn, vec![]);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![
        KeyUsagePurpose::KeyCertSign,
        KeyUsagePurpose::CrlSign,
        KeyUsagePurpose::DigitalSignature,
    ];
    params
}

fn leaf_params(dns_name: &str) -> CertificateParams {
    let mut params = named(dns_name, vec![dns_name.to_string()]);
    params.key_usages = vec![KeyUsagePurpose::DigitalSignature];
    params
}

fn chain_with_leaf(params: CertificateParams) -> TestChain {
    let root = Certificate::from_params(ca_params("Test IPsec Root")).expect("root");
    let intermediate = Certificate::from_params(ca_params("Test IPsec Intermediate")).expect("intermediate");
    let leaf = Certificate::from_params(params).expect("leaf");
    TestChain {
        leaf: leaf.serialize_der_with_signer(&intermediate).expect("leaf der"),
        intermediate: intermediate.serialize_der_with_signer(&root).expect("intermediate der"),
        root: root.serialize_der().expect("root der"),
    }
}

/// Leaf for `dns_name`, signed by an intermediate, signed by a root.
pub fn generate_chain(dns_name: &str) -> TestChain {
    chain_with_leaf(leaf_params(dns_name))
}

/// Same as `generate_chain` but the leaf carries the given EKUs.
pub fn generate_chain_with_eku(dns_name: &str, ekus: Vec<ExtendedKeyUsagePurpose>) -> TestChain {
    let mut params = leaf_params(dns_name);
    params.extended_key_usages = ekus;
    chain_with_leaf(params)
}

/// Same as `generate_chain` but the leaf subject CN is `cn`.
pub fn generate_chain_with_subject(cn: &str, dns_name: &str) -> TestChain {
    let mut params = leaf_params(dns_name);
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, cn);
    params.distinguished_name = dn;
    chain_with_leaf(params)
}

/// Leaf whose only SAN is an IP address.
pub fn generate_ip_chain(ip: IpAddr) -> TestChain {
    let mut params = named(&ip.to_string(), vec![]);
    params.subject_alt_names = vec![SanType::IpAddress(ip)];
    params.key_usages = vec![KeyUsagePurpose::DigitalSignature];
    chain_with_leaf(params)
}

/// Self-signed certificate for `dns_name` that can act as its own anchor.
pub fn generate_self_signed(dns_name: &str) -> Vec<u8> {
    let mut params = named(dns_name, vec![dns_name.to_string()]);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![KeyUsagePurpose::DigitalSignature, KeyUsagePurpose::KeyCertSign];
    Certificate::from_params(params).expect("cert").serialize_der().expect("der")
}

pub fn output_text(out: &[u8]) -> String {
    String::from_utf8(out.to_vec()).expect("utf8 report")
}

// ===== Scripted engine =====

/// Engine-side resource with live accounting: construct/clone acquire,
/// drop releases.
pub struct Handle<T> {
    pub value: T,
    live: Rc<Cell<i64>>,
}

impl<T> Handle<T> {
    fn new(value: T, live: &Rc<Cell<i64>>) -> Self {
        live.set(live.get() + 1);
        Self { value, live: live.clone() }
    }
}

impl<T: Clone> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle::new(self.value.clone(), &self.live)
    }
}

impl<T> Drop for Handle<T> {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    BuildChain,
    MakePolicy,
    CreateContext,
    Evaluate,
    Properties,
}

type Rule = Box<dyn Fn(&[Vec<u8>], &str) -> TrustVerdict>;

/// In-memory engine with scripted verdicts. A buffer "decodes" when it
/// starts with `CERT`.
pub struct ScriptedEngine {
    rule: Rule,
    properties: Vec<CertificateProperties>,
    fail_at: Option<Stage>,
    live: Rc<Cell<i64>>,
    calls: RefCell<Vec<Stage>>,
}

pub struct ScriptedContext {
    chain: Vec<Vec<u8>>,
    identity: String,
}

impl ScriptedEngine {
    pub fn with_verdict(verdict: TrustVerdict) -> Self {
        Self::with_rule(move |_, _| verdict)
    }

    pub fn with_rule(rule: impl Fn(&[Vec<u8>], &str) -> TrustVerdict + 'static) -> Self {
        Self {
            rule: Box::new(rule),
            properties: Vec::new(),
            fail_at: None,
            live: Rc::new(Cell::new(0)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn properties(mut self, properties: Vec<CertificateProperties>) -> Self {
        self.properties = properties;
        self
    }

    pub fn failing_at(mut self, stage: Stage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    /// Handles currently acquired and not yet released.
    pub fn live_handles(&self) -> i64 {
        self.live.get()
    }

    pub fn called(&self, stage: Stage) -> bool {
        self.calls.borrow().contains(&stage)
    }

    fn enter(&self, stage: Stage) -> EngineResult<()> {
        self.calls.borrow_mut().push(stage);
        if self.fail_at == Some(stage) {
            return Err(match stage {
                Stage::Decode | Stage::BuildChain | Stage::MakePolicy => {
                    EngineError::Allocation(format!("scripted failure at {stage:?}"))
                }
                Stage::CreateContext => EngineError::TrustContextCreation("scripted".into()),
                Stage::Evaluate | Stage::Properties => EngineError::Evaluation("scripted".into()),
            });
        }
        Ok(())
    }
}

pub fn cert_bytes(tag: &str) -> Vec<u8> {
    format!("CERT:{tag}").into_bytes()
}

impl ite::TrustEngine for ScriptedEngine {
    type Certificate = Handle<Vec<u8>>;
    type Chain = Handle<Vec<Handle<Vec<u8>>>>;
    type Policy = Handle<String>;
    type Context = Handle<ScriptedContext>;

    fn decode(&self, der: RawCertificateBytes<'_>) -> EngineResult<Option<Self::Certificate>> {
        self.enter(Stage::Decode)?;
        if der.as_slice().starts_with(b"CERT") {
            Ok(Some(Handle::new(der.as_slice().to_vec(), &self.live)))
        } else {
            Ok(None)
        }
    }

    fn build_chain(&self, certs: &[Self::Certificate]) -> EngineResult<Self::Chain> {
        self.enter(Stage::BuildChain)?;
        Ok(Handle::new(certs.to_vec(), &self.live))
    }

    fn make_policy(&self, kind: PolicyKind, properties: &PolicyProperties) -> EngineResult<Self::Policy> {
        self.enter(Stage::MakePolicy)?;
        assert_eq!(kind, PolicyKind::IpSec);
        let name = properties.policy_name().expect("policy name");
        Ok(Handle::new(name.to_string(), &self.live))
    }

    fn create_context(&self, chain: &Self::Chain, policy: &Self::Policy) -> EngineResult<Self::Context> {
        self.enter(Stage::CreateContext)?;
        let ctx = ScriptedContext {
            chain: chain.value.iter().map(|c| c.value.clone()).collect(),
            identity: policy.value.clone(),
        };
        Ok(Handle::new(ctx, &self.live))
    }

    fn evaluate(&self, context: &mut Self::Context) -> EngineResult<TrustVerdict> {
        self.enter(Stage::Evaluate)?;
        Ok((self.rule)(&context.value.chain, &context.value.identity))
    }

    fn properties(&self, _context: &Self::Context) -> EngineResult<Vec<CertificateProperties>> {
        self.enter(Stage::Properties)?;
        Ok(self.properties.clone())
    }
}
