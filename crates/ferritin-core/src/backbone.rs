//! Per-chain backbone coordinates extracted from a `pdbtbx` structure.
//!
//! Each [`ChainBackbone`] holds one entry per residue that carries an alpha carbon.
//! Absent N, C or CB atoms are stored as [`Vec3::NAN`] so that downstream encoders can
//! mask or repair them. Atoms are matched by name and element, so a calcium ion
//! (`CA`) never passes for an alpha carbon.
use crate::geometry::Vec3;
use itertools::Itertools;
use pdbtbx::{Atom, Chain, Element, Residue, PDB};
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum BackboneAtom {
    N,
    CA,
    C,
    CB,
}

impl BackboneAtom {
    pub fn element(&self) -> Element {
        match self {
            BackboneAtom::N => Element::N,
            BackboneAtom::CA | BackboneAtom::C | BackboneAtom::CB => Element::C,
        }
    }

    /// Name and element match. Atoms without an element column are accepted unless
    /// they are HETATM records.
    fn matches(&self, atom: &Atom) -> bool {
        atom.name() == self.to_string()
            && atom
                .element()
                .map_or(!atom.hetero(), |element| *element == self.element())
    }
}

#[derive(Debug, Clone)]
pub struct ChainBackbone {
    pub chain_id: String,
    pub res_ids: Vec<i32>,
    pub insertion_codes: Vec<Option<String>>,
    pub res_names: Vec<String>,
    pub ca: Vec<Vec3>,
    pub n: Vec<Vec3>,
    pub c: Vec<Vec3>,
    pub cb: Vec<Vec3>,
}

fn find_atom(residue: &Residue, atom: BackboneAtom) -> Option<Vec3> {
    residue
        .atoms()
        .find(|a| atom.matches(a))
        .map(|a| Vec3::from(a.pos()))
}

impl ChainBackbone {
    /// One backbone per chain of the first model. Chains without any CA atom
    /// (waters, ligands) are skipped.
    pub fn from_pdb(pdb: &PDB) -> Vec<ChainBackbone> {
        pdb.models()
            .take(1)
            .flat_map(|model| model.chains())
            .map(ChainBackbone::from)
            .filter(|backbone| {
                if backbone.is_empty() {
                    log::debug!("chain {} has no CA atoms, skipping", backbone.chain_id);
                }
                !backbone.is_empty()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ca.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ca.is_empty()
    }

    /// Residue number with its insertion code, e.g. `52A`.
    pub fn residue_label(&self, index: usize) -> String {
        match &self.insertion_codes[index] {
            Some(code) => format!("{}{}", self.res_ids[index], code),
            None => self.res_ids[index].to_string(),
        }
    }

    pub fn residue_labels(&self) -> Vec<String> {
        (0..self.len()).map(|i| self.residue_label(i)).collect()
    }

    pub fn coords(&self, atom: BackboneAtom) -> &[Vec3] {
        match atom {
            BackboneAtom::N => &self.n,
            BackboneAtom::CA => &self.ca,
            BackboneAtom::C => &self.c,
            BackboneAtom::CB => &self.cb,
        }
    }

    /// Number of residues whose atom of the given type is missing.
    pub fn count_missing(&self, atom: BackboneAtom) -> usize {
        self.coords(atom).iter().filter(|p| p.is_nan()).count()
    }
}

impl From<&Chain> for ChainBackbone {
    fn from(chain: &Chain) -> Self {
        let (res_ids, insertion_codes, res_names, ca, n, c, cb): (
            Vec<i32>,
            Vec<Option<String>>,
            Vec<String>,
            Vec<Vec3>,
            Vec<Vec3>,
            Vec<Vec3>,
            Vec<Vec3>,
        ) = chain
            .residues()
            .filter_map(|residue| {
                let ca = find_atom(residue, BackboneAtom::CA)?;
                let or_nan = |atom| find_atom(residue, atom).unwrap_or(Vec3::NAN);
                let (serial, insertion_code) = residue.id();
                Some((
                    serial as i32,
                    insertion_code.map(str::to_string),
                    residue.name().unwrap_or_default().to_string(),
                    ca,
                    or_nan(BackboneAtom::N),
                    or_nan(BackboneAtom::C),
                    or_nan(BackboneAtom::CB),
                ))
            })
            .multiunzip();

        ChainBackbone {
            chain_id: chain.id().to_string(),
            res_ids,
            insertion_codes,
            res_names,
            ca,
            n,
            c,
            cb,
        }
    }
}
