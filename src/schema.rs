//! Embedded Anchor IDL and conformance checks.
//!
//! The IDL is the program's versioned interface description.  It is embedded
//! verbatim from `idl/ez_token_swap.json` and never restated in code; the
//! test suite runs every builder through [`verify_instruction`] so a drifted
//! schema fails `cargo test` instead of silently miscoding.

use serde::Deserialize;
use solana_sdk::instruction::Instruction;

use crate::error::{Error, Result};
use crate::instructions::disc;

/// The program's IDL, embedded verbatim.
pub const IDL_JSON: &str = include_str!("../idl/ez_token_swap.json");

// ─── IDL document ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Idl {
    pub version:      String,
    pub name:         String,
    pub instructions: Vec<IdlInstruction>,
}

#[derive(Debug, Deserialize)]
pub struct IdlInstruction {
    pub name:     String,
    pub accounts: Vec<IdlAccount>,
    pub args:     Vec<IdlField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccount {
    pub name:      String,
    pub is_mut:    bool,
    pub is_signer: bool,
}

#[derive(Debug, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty:   String,
}

/// Parse the embedded IDL.
pub fn load_idl() -> Result<Idl> {
    Ok(serde_json::from_str(IDL_JSON)?)
}

impl Idl {
    /// Look up an instruction by its IDL (camelCase) name.
    pub fn instruction(&self, name: &str) -> Result<&IdlInstruction> {
        self.instructions
            .iter()
            .find(|ix| ix.name == name)
            .ok_or_else(|| Error::SchemaMismatch {
                instruction: name.to_string(),
                reason:      "not present in the IDL".to_string(),
            })
    }
}

// ─── Conformance ──────────────────────────────────────────────────────────────

/// Check a built instruction against its IDL entry: discriminator, payload
/// width, account count, and signer/writable flags.
pub fn verify_instruction(ix: &Instruction, schema: &IdlInstruction) -> Result<()> {
    let mismatch = |reason: String| Error::SchemaMismatch {
        instruction: schema.name.clone(),
        reason,
    };

    let expected_disc = disc(&snake_case(&schema.name));
    if ix.data.len() < 8 || ix.data[..8] != expected_disc {
        return Err(mismatch("discriminator does not match the IDL name".into()));
    }

    let mut width = 0usize;
    for arg in &schema.args {
        width += scalar_width(&arg.ty).ok_or_else(|| {
            mismatch(format!("unsupported arg type `{}` for `{}`", arg.ty, arg.name))
        })?;
    }
    if ix.data.len() != 8 + width {
        return Err(mismatch(format!(
            "payload is {} bytes; IDL args take {}",
            ix.data.len() - 8,
            width
        )));
    }

    if ix.accounts.len() != schema.accounts.len() {
        return Err(mismatch(format!(
            "{} accounts; IDL lists {}",
            ix.accounts.len(),
            schema.accounts.len()
        )));
    }
    for (i, (meta, acc)) in ix.accounts.iter().zip(schema.accounts.iter()).enumerate() {
        if meta.is_writable != acc.is_mut || meta.is_signer != acc.is_signer {
            return Err(mismatch(format!(
                "account #{i} `{}`: flags (writable={}, signer={}) differ from IDL \
                 (mut={}, signer={})",
                acc.name, meta.is_writable, meta.is_signer, acc.is_mut, acc.is_signer
            )));
        }
    }

    Ok(())
}

/// Anchor derives discriminators from the snake_case method name, while the
/// IDL records camelCase.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn scalar_width(ty: &str) -> Option<usize> {
    match ty {
        "bool" | "u8" | "i8" => Some(1),
        "u16" | "i16" => Some(2),
        "u32" | "i32" => Some(4),
        "u64" | "i64" => Some(8),
        "u128" | "i128" => Some(16),
        _ => None,
    }
}
