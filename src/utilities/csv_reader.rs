use std::path::Path;

use csv_async::{AsyncReader, AsyncReaderBuilder};
use futures::StreamExt;
use tokio::fs::File as AsyncFile;
use tokio::io::BufReader;

use crate::error::DatasetError;
use crate::utilities::dataset::Dataset;

/// Sets up CSV file reading.
///
/// Records may have fewer or more fields than the header row.
async fn setup_csv_reader(source_path: &Path) -> Result<AsyncReader<BufReader<AsyncFile>>, DatasetError> {
    let file = AsyncFile::open(source_path)
        .await
        .map_err(|source| DatasetError::Load {
            path: source_path.to_path_buf(),
            source,
        })?;
    let reader = BufReader::new(file);
    let csv_reader = AsyncReaderBuilder::new().flexible(true).create_reader(reader);

    Ok(csv_reader)
}

/// Loads the whole input table into memory.
///
/// # Errors
///
/// Any unreadable file or malformed record aborts the load.
pub async fn load_dataset(source_path: &Path) -> Result<Dataset, DatasetError> {
    let csv_error = |source| DatasetError::Csv {
        path: source_path.to_path_buf(),
        source,
    };

    let mut csv_reader = setup_csv_reader(source_path).await?;

    let headers = csv_reader
        .headers()
        .await
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    let mut records = std::pin::pin!(csv_reader.records());
    while let Some(record) = records.next().await {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(path = %source_path.display(), rows = rows.len(), "dataset loaded");
    Ok(Dataset::new(headers, rows))
}
