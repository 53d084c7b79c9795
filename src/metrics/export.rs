use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{check_cost_set, HvError};

/// A snapshot of the cost vectors of an optimisation run at a given generation (or batch of
/// trials). Snapshots can be exported to JSON files during a run and used later to track the
/// hyper-volume convergence with [`crate::metrics::HyperVolume::from_files`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CostSetExport {
    /// The name of the run. This is used as file prefix.
    pub name: String,
    /// The generation the snapshot was collected at.
    pub generation: usize,
    /// The time when the snapshot was created.
    pub exported_on: DateTime<Utc>,
    /// The cost vectors. Each item is one trial; each nested vector contains the objective
    /// values.
    pub costs: Vec<Vec<f64>>,
}

impl CostSetExport {
    /// Create a new snapshot timestamped with the current time. This returns an error if the
    /// vectors do not have the same size or contain NaNs.
    ///
    /// # Arguments
    ///
    /// * `name`: The name of the run.
    /// * `generation`: The generation number.
    /// * `costs`: The cost vectors.
    ///
    /// returns: `Result<CostSetExport, HvError>`
    pub fn new(name: &str, generation: usize, costs: Vec<Vec<f64>>) -> Result<Self, HvError> {
        check_cost_set(&costs)?;
        Ok(Self {
            name: name.to_string(),
            generation,
            exported_on: Utc::now(),
            costs,
        })
    }

    /// The name of the JSON file the snapshot is saved to.
    ///
    /// returns: `String`
    pub fn file_name(&self) -> String {
        format!("{}_gen{}.json", self.name, self.generation)
    }

    /// Save the snapshot to a JSON file in the `destination` folder. The file is named
    /// `<name>_gen<generation>.json`. This returns an error if the folder does not exist or
    /// the file cannot be written.
    ///
    /// # Arguments
    ///
    /// * `destination`: The folder where to save the file.
    ///
    /// returns: `Result<PathBuf, HvError>`: the path to the new file.
    pub fn save_to_json(&self, destination: &Path) -> Result<PathBuf, HvError> {
        if !destination.is_dir() {
            return Err(HvError::Io(
                destination.display().to_string(),
                "the destination folder does not exist".to_string(),
            ));
        }

        let data = serde_json::to_string_pretty(self).map_err(|e| {
            HvError::Generic(format!(
                "The following error occurred while converting the snapshot: {e}"
            ))
        })?;

        let file = destination.join(self.file_name());
        info!("Saving JSON file {:?}", file);
        fs::write(&file, data)
            .map_err(|e| HvError::Io(file.display().to_string(), e.to_string()))?;
        Ok(file)
    }
}

/// Read a snapshot previously exported with [`CostSetExport::save_to_json`].
///
/// # Arguments
///
/// * `file`: The path to the JSON file.
///
/// returns: `Result<CostSetExport, HvError>`
pub fn read_json_file(file: &Path) -> Result<CostSetExport, HvError> {
    let file_str = file.display().to_string();
    let data = fs::File::open(file).map_err(|e| HvError::Io(file_str.clone(), e.to_string()))?;

    let export: CostSetExport = serde_json::from_reader(data)
        .map_err(|e| HvError::Parse(file_str.clone(), e.to_string()))?;
    check_cost_set(&export.costs)?;

    debug!(
        "Read {} cost vectors at generation {} from {}",
        export.costs.len(),
        export.generation,
        file_str
    );
    Ok(export)
}

/// Read all the snapshots with the `json` extension in a folder.
///
/// # Arguments
///
/// * `folder`: The folder containing the JSON files.
///
/// returns: `Result<Vec<CostSetExport>, HvError>`: the snapshots sorted by generation.
pub fn read_json_files(folder: &Path) -> Result<Vec<CostSetExport>, HvError> {
    let folder_str = folder.display().to_string();
    let entries =
        fs::read_dir(folder).map_err(|e| HvError::Io(folder_str.clone(), e.to_string()))?;

    let mut exports = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| HvError::Io(folder_str.clone(), e.to_string()))?
            .path();
        if path.is_file() && path.extension() == Some(OsStr::new("json")) {
            exports.push(read_json_file(&path)?);
        }
    }

    if exports.is_empty() {
        return Err(HvError::Io(
            folder_str,
            "the folder does not contain any JSON file".to_string(),
        ));
    }
    info!("Read {} snapshots from {:?}", exports.len(), folder);

    exports.sort_by_key(|e| e.generation);
    Ok(exports)
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use crate::metrics::export::{read_json_file, read_json_files, CostSetExport};
    use crate::metrics::HyperVolume;

    /// Create an empty temporary folder for a test.
    fn test_folder(name: &str) -> PathBuf {
        let folder = env::temp_dir().join(format!("pareto_hv_{}_{}", name, std::process::id()));
        if folder.exists() {
            fs::remove_dir_all(&folder).unwrap();
        }
        fs::create_dir_all(&folder).unwrap();
        folder
    }

    #[test]
    fn test_save_and_read() {
        let folder = test_folder("save_and_read");
        let export =
            CostSetExport::new("run", 5, vec![vec![1.0, 1.0], vec![2.0, 0.0]]).unwrap();
        let file = export.save_to_json(&folder).unwrap();
        assert_eq!(file.file_name().unwrap(), "run_gen5.json");

        let imported = read_json_file(&file).unwrap();
        assert_eq!(imported, export);
        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn test_errors() {
        assert!(CostSetExport::new("run", 0, vec![vec![1.0], vec![1.0, 2.0]]).is_err());

        let folder = test_folder("errors");
        let export = CostSetExport::new("run", 0, vec![vec![1.0, 2.0]]).unwrap();
        assert!(export.save_to_json(&folder.join("missing")).is_err());
        assert!(read_json_files(&folder)
            .unwrap_err()
            .to_string()
            .contains("does not contain any JSON file"));

        let file = folder.join("broken.json");
        fs::write(&file, "{\"name\": \"run\"}").unwrap();
        let err = read_json_file(&file).unwrap_err().to_string();
        assert!(err.contains("Cannot parse the JSON file"), "{}", err);
        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    /// Track the hyper-volume of a run over three generations.
    fn test_convergence() {
        let folder = test_folder("convergence");
        let generations = [
            (20, vec![vec![1.0, 1.0], vec![2.0, 0.0], vec![0.0, 2.0]]),
            (0, vec![vec![2.0, 2.0]]),
            (10, vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![2.0, 2.0]]),
        ];
        for (generation, costs) in generations {
            CostSetExport::new("run", generation, costs)
                .unwrap()
                .save_to_json(&folder)
                .unwrap();
        }
        // ignored
        fs::write(folder.join("notes.txt"), "not a snapshot").unwrap();

        let data = read_json_files(&folder).unwrap();
        let hvs = HyperVolume::default().from_files(&data, &[3.0, 3.0]).unwrap();
        assert_eq!(hvs.generations(), vec![0, 10, 20]);
        assert_eq!(hvs.values(), vec![1.0, 4.0, 6.0]);
        assert_eq!(hvs.times().len(), 3);

        let hv = HyperVolume::default().from_file(&data[2], &[3.0, 3.0]).unwrap();
        assert_eq!(hv.generation, 20);
        assert_eq!(hv.value, 6.0);
        fs::remove_dir_all(&folder).unwrap();
    }
}
