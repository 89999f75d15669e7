use std::path::Path;

use tokio::{
    fs::File,
    io::{self, AsyncBufReadExt, BufReader},
};

/// Read a text file line by line into a list of strings
pub async fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let mut lines = BufReader::new(File::open(path).await?).lines();
    let mut result = Vec::new();

    while let Some(line) = lines.next_line().await? {
        result.push(line);
    }

    Ok(result)
}
