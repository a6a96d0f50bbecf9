pub use {
    csv,
    std::io::{self, Error, ErrorKind, Result},
};

use {
    crate::{
        bounds::{Bounds, COUNT_BOUNDS, DIVISOR_BOUNDS, VALUE_BOUNDS},
        sampling::{PROGRESS_THRESHOLD, VALUE_RANGE, sample_batched},
    },
    rand::Rng,
    std::{
        fs,
        path::{Path, PathBuf},
        str::FromStr,
    },
    tracing::debug,
};

pub const OUTPUT_DIR: &str = "data/input";

/// Creates `dir` if needed and returns the path of `name` inside it.
pub fn output_path<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    Ok(dir.join(name))
}

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidData, msg.into())
}

/// Reads the record expected on `line` (1-based). The reader skips blank
/// lines, so finishing past `line + 1` means `what` was left empty.
fn next_record<R: io::Read>(
    reader: &mut csv::Reader<R>,
    line: u64,
    what: &str,
) -> Result<csv::StringRecord> {
    let missing = || invalid(format!("missing line {line}: \"{what}\""));
    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Err(missing());
    }
    if reader.position().line() > line + 1 {
        return Err(missing());
    }
    Ok(record)
}

/// Parses every field of `record` and checks it against `bounds`.
fn parse_fields<T>(record: &csv::StringRecord, what: &str, bounds: Bounds) -> Result<Vec<T>>
where
    T: FromStr + Copy + Into<u64>,
{
    record
        .iter()
        .map(|field| {
            let v = field
                .parse::<T>()
                .map_err(|_| invalid(format!("line \"{what}\" expected type: <integer>")))?;
            if !bounds.contains(v.into()) {
                return Err(invalid(format!(
                    "line \"{what}\" value {field} outside [{}, {}]",
                    bounds.min, bounds.max
                )));
            }
            Ok(v)
        })
        .collect()
}

/// Input for the divisor-sum problem: a single integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisorInput {
    pub n: u64,
}

impl DivisorInput {
    pub fn generate<R: Rng>(rng: &mut R, bounds: Bounds) -> Self {
        let n = rng.random_range(bounds.range());
        debug!(n, min = bounds.min, max = bounds.max, "drew divisor input");
        Self { n }
    }

    pub fn serialize_csv<W>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()>
    where
        W: io::Write,
    {
        writer.write_record([self.n.to_string()])
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = writer_builder().from_path(path.as_ref())?;
        self.serialize_csv(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.as_ref().display(), "wrote divisor input");
        Ok(())
    }

    pub fn read_from<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = reader_builder().from_reader(reader);
        let line = next_record(&mut reader, 1, "n")?;
        match parse_fields::<u64>(&line, "n", DIVISOR_BOUNDS)?.as_slice() {
            [n] => Ok(Self { n: *n }),
            _ => Err(invalid("line \"n\" expected exactly one integer")),
        }
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_from(fs::File::open(path)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Abilities,
    Difficulties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Started { seq: Sequence, total: usize },
    /// Only emitted for sequences longer than `PROGRESS_THRESHOLD`.
    Batch {
        seq: Sequence,
        done: usize,
        total: usize,
    },
}

/// Input for the matching problem: player abilities and problem difficulties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingInput {
    pub abilities: Vec<u16>,
    pub difficulties: Vec<u16>,
}

impl MatchingInput {
    /// Samples `n` abilities, then `m` difficulties, from one stream.
    pub fn generate<R, F>(rng: &mut R, n: usize, m: usize, mut report: F) -> Self
    where
        R: Rng,
        F: FnMut(Progress),
    {
        let mut sample = |seq, total| {
            report(Progress::Started { seq, total });
            sample_batched(&mut *rng, total, VALUE_RANGE, |done, total| {
                if total > PROGRESS_THRESHOLD {
                    report(Progress::Batch { seq, done, total });
                }
            })
        };

        let abilities = sample(Sequence::Abilities, n);
        let difficulties = sample(Sequence::Difficulties, m);
        Self {
            abilities,
            difficulties,
        }
    }

    pub fn n(&self) -> usize {
        self.abilities.len()
    }

    pub fn m(&self) -> usize {
        self.difficulties.len()
    }

    pub fn serialize_csv<W>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()>
    where
        W: io::Write,
    {
        writer.write_record([self.n().to_string(), self.m().to_string()])?;
        for line in [&self.abilities, &self.difficulties] {
            for v in line {
                writer.write_field(v.to_string())?;
            }
            writer.write_record(None::<&[u8]>)?;
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = writer_builder().from_path(path.as_ref())?;
        self.serialize_csv(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.as_ref().display(), n = self.n(), m = self.m(), "wrote matching input");
        Ok(())
    }

    pub fn read_from<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = reader_builder().from_reader(reader);

        let header = next_record(&mut reader, 1, "n m")?;
        let (n, m) = match parse_fields::<u64>(&header, "n m", COUNT_BOUNDS)?.as_slice() {
            [n, m] => (*n as usize, *m as usize),
            _ => return Err(invalid("line \"n m\" expected exactly two integers")),
        };

        let abilities = parse_fields::<u16>(
            &next_record(&mut reader, 2, "abilities")?,
            "abilities",
            VALUE_BOUNDS,
        )?;
        let difficulties = parse_fields::<u16>(
            &next_record(&mut reader, 3, "difficulties")?,
            "difficulties",
            VALUE_BOUNDS,
        )?;

        if abilities.len() != n {
            return Err(invalid(format!(
                "expected {n} abilities, found {}",
                abilities.len()
            )));
        }
        if difficulties.len() != m {
            return Err(invalid(format!(
                "expected {m} difficulties, found {}",
                difficulties.len()
            )));
        }

        Ok(Self {
            abilities,
            difficulties,
        })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_from(fs::File::open(path)?)
    }
}
