use crate::config::InputSet;
use crate::numbers::Summary;
use anyhow::{Context, Result, bail};
use glob::{Pattern, glob};
use rmp_serde::encode;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub struct Manager {
    data_dir: PathBuf,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.is_dir() {
            bail!("{data_dir:?} is not a directory");
        }
        Ok(Self { data_dir })
    }

    pub fn analyze(&self) -> Result<usize> {
        let input_files = self
            .matching_files("input-*.toml")
            .context("failed to glob input files")?;

        for input_file in &input_files {
            let input = InputSet::from_file(input_file)
                .with_context(|| format!("failed to load {input_file:?}"))?;

            let report_file = self
                .report_file(input_file)
                .context("failed to name report file")?;
            save_summary(&Summary::new(&input.numbers), &report_file)
                .with_context(|| format!("failed to save {report_file:?}"))?;
            log::info!("saved {report_file:?}");
        }

        Ok(input_files.len())
    }

    pub fn clean(&self) -> Result<()> {
        let report_files = self
            .matching_files("report-*.msgpack")
            .context("failed to glob report files")?;

        for report_file in report_files {
            fs::remove_file(&report_file)
                .with_context(|| format!("failed to remove {report_file:?}"))?;
            log::info!("removed {report_file:?}");
        }

        Ok(())
    }

    fn matching_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let data_dir = self.data_dir.to_str().context("data dir is not valid UTF-8")?;
        let pattern = Path::new(&Pattern::escape(data_dir)).join(pattern);
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let files = glob(pattern)?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        Ok(files)
    }

    fn report_file(&self, input_file: &Path) -> Result<PathBuf> {
        let stem = input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.strip_prefix("input-"))
            .context("input file name is not valid")?;
        Ok(self.data_dir.join(format!("report-{stem}.msgpack")))
    }
}

fn save_summary(summary: &Summary, file: &Path) -> Result<()> {
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let mut writer = BufWriter::new(file);

    encode::write_named(&mut writer, summary).context("failed to serialize summary")?;

    writer.flush().context("failed to flush writer stream")?;

    Ok(())
}
