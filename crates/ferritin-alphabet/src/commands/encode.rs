use crate::cli::OutputFormat;
use anyhow::{anyhow, bail, Context, Result};
use ferritin_alphabet::{states_to_string, TwelveStateEncoder};
use ferritin_core::{BackboneAtom, ChainBackbone};
use itertools::Itertools;
use pdbtbx::PDB;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ChainRecord {
    name: String,
    chain: String,
    length: usize,
    residues: Vec<String>,
    states: String,
    codes: Vec<u8>,
}

impl ChainRecord {
    fn to_fasta(&self) -> String {
        format!(">{}_{}\n{}\n", self.name, self.chain, self.states)
    }
}

fn load_structure(input: &str) -> Result<PDB> {
    let (pdb, warnings) = pdbtbx::open(input).map_err(|errors| {
        anyhow!(
            "failed to read {}: {}",
            input,
            errors.iter().map(|e| e.to_string()).join("; ")
        )
    })?;
    for warning in &warnings {
        log::warn!("{}: {}", input, warning);
    }
    Ok(pdb)
}

fn encode_chains(name: &str, chains: Vec<ChainBackbone>) -> Vec<ChainRecord> {
    let mut encoder = TwelveStateEncoder::new();
    chains
        .into_iter()
        .map(|mut backbone| {
            let repaired = backbone.count_missing(BackboneAtom::CB);
            let codes = encoder.encode_chain(&mut backbone).to_vec();
            let valid = encoder.mask().iter().filter(|&&m| m).count();
            log::info!(
                "chain {}: {} residues, {} classified, {} CB rebuilt",
                backbone.chain_id,
                codes.len(),
                valid,
                repaired
            );
            ChainRecord {
                name: name.to_string(),
                chain: backbone.chain_id.clone(),
                length: codes.len(),
                residues: backbone.residue_labels(),
                states: states_to_string(&codes),
                codes,
            }
        })
        .collect()
}

fn render(records: &[ChainRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Fasta => Ok(records.iter().map(ChainRecord::to_fasta).collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn execute(
    input: String,
    output: Option<String>,
    format: OutputFormat,
    chain: Option<String>,
) -> Result<()> {
    let pdb = load_structure(&input)?;
    let name = Path::new(&input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.clone());

    let mut chains = ChainBackbone::from_pdb(&pdb);
    if let Some(id) = &chain {
        chains.retain(|backbone| &backbone.chain_id == id);
        if chains.is_empty() {
            bail!("chain {} not found in {}", id, input);
        }
    }

    let records = encode_chains(&name, chains);
    let rendered = render(&records, format)?;

    match output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("failed to write {}", path))?;
            log::info!("wrote {} chains to {}", records.len(), path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
