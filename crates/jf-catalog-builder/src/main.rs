//! 서빙 카탈로그 배치 빌더 CLI
//!
//! O*NET류 TSV 덤프 디렉터리를 읽어 직업별 역량 프로파일을 집계하고
//! CSV/JSON 카탈로그 파일로 내보낸다.

mod onet;

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use jf_common::builder::{CatalogBuilder, SourceTable};
use jf_common::{catalog, logging};
use thiserror::Error;
use tracing::{error, info, warn};

const APP_NAME: &str = "jf-catalog-builder";

/// 속성 테이블 파일명과 테이블별로 신뢰하는 출처 태그
const SOURCE_TABLES: [(&str, &str); 3] = [
    ("Work Styles.txt", "Incumbent"),
    ("Skills.txt", "Analyst"),
    ("Abilities.txt", "Analyst"),
];

const OCCUPATION_DATA: &str = "Occupation Data.txt";

#[derive(Debug, Parser)]
#[command(name = APP_NAME, about = "직업 DB 속성 테이블을 집계해 추천용 카탈로그를 만든다")]
struct Args {
    /// TSV 원본이 들어 있는 디렉터리 (Occupation Data.txt, Work Styles.txt, ...)
    #[arg(long)]
    data_dir: PathBuf,

    /// CSV 카탈로그 출력 경로
    #[arg(long)]
    out_csv: Option<PathBuf>,

    /// JSON 카탈로그 출력 경로
    #[arg(long)]
    out_json: Option<PathBuf>,

    /// 채워진 역량 축 최소 개수. 이보다 적은 직업은 제외한다.
    #[arg(long, default_value_t = 3)]
    min_dimensions: usize,
}

#[derive(Debug, Error)]
enum BuildError {
    #[error("at least one of --out-csv / --out-json must be given")]
    NoOutput,
    #[error("no source tables found under {0}")]
    NoSources(PathBuf),
    #[error("no occupations survived aggregation; check the source tables")]
    EmptyCatalog,
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Source(#[from] onet::SourceParseError),
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
}

fn load_titles(data_dir: &Path) -> Result<HashMap<String, String>, BuildError> {
    let path = data_dir.join(OCCUPATION_DATA);
    if !path.exists() {
        // 제목 테이블이 없어도 집계는 가능하다 (제목은 Unknown으로 채운다)
        warn!(file = OCCUPATION_DATA, "occupation titles missing; titles will be Unknown");
        return Ok(HashMap::new());
    }

    let titles = onet::load_occupation_titles(&path)?;
    info!(occupations = titles.len(), "loaded occupation titles");
    Ok(titles)
}

fn load_sources(data_dir: &Path) -> Result<Vec<SourceTable>, BuildError> {
    let mut sources = Vec::new();

    for (file, provenance) in SOURCE_TABLES {
        let path = data_dir.join(file);
        if !path.exists() {
            warn!(file, "source table missing; skipping");
            continue;
        }

        let table = onet::load_source_table(&path, file, provenance)?;
        info!(file, records = table.records.len(), provenance, "loaded source table");
        sources.push(table);
    }

    if sources.is_empty() {
        return Err(BuildError::NoSources(data_dir.to_path_buf()));
    }
    Ok(sources)
}

fn create_output(path: &Path) -> Result<File, BuildError> {
    File::create(path).map_err(|source| BuildError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: &Args) -> Result<(), BuildError> {
    if args.out_csv.is_none() && args.out_json.is_none() {
        return Err(BuildError::NoOutput);
    }

    let titles = load_titles(&args.data_dir)?;
    let sources = load_sources(&args.data_dir)?;

    let profiles = CatalogBuilder::new()
        .min_dimensions(args.min_dimensions)
        .build(&titles, &sources);
    if profiles.is_empty() {
        return Err(BuildError::EmptyCatalog);
    }

    if let Some(path) = &args.out_csv {
        catalog::write_csv(create_output(path)?, &profiles)?;
        info!(path = %path.display(), occupations = profiles.len(), "wrote csv catalog");
    }
    if let Some(path) = &args.out_json {
        catalog::write_json(create_output(path)?, &profiles)?;
        info!(path = %path.display(), occupations = profiles.len(), "wrote json catalog");
    }

    Ok(())
}

fn main() {
    logging::install_tracing_panic_hook(APP_NAME);
    logging::init_tracing_subscriber(APP_NAME);

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!(error = %err, "catalog build failed");
        std::process::exit(1);
    }
}
