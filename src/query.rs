//! Line-oriented query feeds for the chained string set and the substring matcher.
//!
//! Chained set feed: a bucket count line, a query count line, then one query per
//! line (`add s`, `del s`, `find s`, `check i`). `find` prints `yes`/`no` and
//! `check` prints the bucket, most recent first, separated by spaces.
//!
//! Search feed: a pattern line and a text line. Prints the match offsets on one
//! line, separated by spaces.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::cs::hashing::chained::ChainedStringSet;
use crate::cs::string::rabin_karp::TextSearch;
use crate::error::{Error, Result};

/// One command for a [`ChainedStringSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainQuery {
    Add(String),
    Del(String),
    Find(String),
    Check(usize),
}

impl FromStr for ChainQuery {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let (command, arg) = match (parts.next(), parts.next(), parts.next()) {
            (Some(command), Some(arg), None) => (command, arg),
            _ => return Err(Error::MalformedQuery(line.to_owned())),
        };
        match command {
            "add" => Ok(ChainQuery::Add(arg.to_owned())),
            "del" => Ok(ChainQuery::Del(arg.to_owned())),
            "find" => Ok(ChainQuery::Find(arg.to_owned())),
            "check" => arg
                .parse()
                .map(ChainQuery::Check)
                .map_err(|_| Error::MalformedQuery(line.to_owned())),
            _ => Err(Error::MalformedQuery(line.to_owned())),
        }
    }
}

/// Executes [`ChainQuery`]s against a set it owns.
#[derive(Debug)]
pub struct QueryProcessor {
    set: ChainedStringSet,
}

impl QueryProcessor {
    pub fn new(set: ChainedStringSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &ChainedStringSet {
        &self.set
    }

    /// Runs one query and returns the line it prints, if any.
    pub fn execute(&mut self, query: &ChainQuery) -> Result<Option<String>> {
        let output = match query {
            ChainQuery::Add(s) => {
                self.set.add(s);
                None
            }
            ChainQuery::Del(s) => {
                self.set.delete(s);
                None
            }
            ChainQuery::Find(s) => {
                let answer = if self.set.find(s) { "yes" } else { "no" };
                Some(answer.to_owned())
            }
            ChainQuery::Check(i) => Some(self.set.dump_bucket(*i)?.join(" ")),
        };
        Ok(output)
    }
}

fn next_line<I>(lines: &mut I, what: &str) -> Result<String>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(Error::MalformedQuery(format!("missing {}", what))),
    }
}

fn parse_count(line: &str, what: &str) -> Result<usize> {
    line.trim()
        .parse()
        .map_err(|_| Error::MalformedQuery(format!("bad {}: {:?}", what, line)))
}

/// Reads a chained set feed from `reader` and writes its output to `writer`.
///
/// Stops at the first malformed line or out-of-range `check`.
pub fn process_chain_feed<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let mut lines = reader.lines();
    let bucket_count = parse_count(&next_line(&mut lines, "bucket count")?, "bucket count")?;
    let query_count = parse_count(&next_line(&mut lines, "query count")?, "query count")?;
    debug!(
        "chain feed: {} buckets, {} queries",
        bucket_count, query_count
    );

    let mut processor = QueryProcessor::new(ChainedStringSet::new(bucket_count)?);
    for _ in 0..query_count {
        let query: ChainQuery = next_line(&mut lines, "query")?.parse()?;
        if let Some(output) = processor.execute(&query)? {
            writeln!(writer, "{}", output)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Reads a pattern line and a text line from `reader` and writes the match
/// offsets to `writer`.
pub fn process_search_feed<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let mut lines = reader.lines();
    let pattern = next_line(&mut lines, "pattern")?;
    let text = next_line(&mut lines, "text")?;

    let offsets = TextSearch::new(pattern.trim_end(), text.trim_end()).find_all();
    let rendered: Vec<String> = offsets.iter().map(usize::to_string).collect();
    writeln!(writer, "{}", rendered.join(" "))?;
    writer.flush()?;
    Ok(())
}
