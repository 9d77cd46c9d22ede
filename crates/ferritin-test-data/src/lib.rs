//! ferretin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Example structures are included in the crate distribution for reference files.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::helix_strand().create_temp().unwrap();
///
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Idealized backbone, two chains.
    ///
    /// Chain A: 24 residues, a 14 residue alpha helix followed by an extended strand.
    /// Residues 6 and 19 are glycines and residue 10 has its CB removed, so three
    /// residues need CB reconstruction.
    /// Chain B: the first five residues of chain A shifted by 30 Angstrom along x.
    pub fn helix_strand() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/helix_strand.pdb"),
            suffix: "pdb",
        }
    }

    /// Three alanines in chain A numbered 1, 2 and 2A, followed by a calcium ion
    /// (HETATM `CA`, residue 101) and a water in the same chain.
    pub fn calcium_site() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/calcium_site.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
