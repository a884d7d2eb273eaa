use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::prelude::*;
use std::iter::Enumerate;
use std::path::Path;
use std::str::Lines;

lazy_static! {
    static ref SECTION_REGEX: Regex = Regex::new(r"^\s*(BEGIN|END)\s+(\w+)\s*$").unwrap();
}

/// Raw text of an STK data file.
#[derive(Debug)]
pub struct AcFile {
    buf: String,
}

impl AcFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AcFile> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path).map_err(|e| Error::read(path, e))?;
        AcFile::from_reader(&mut file).map_err(|e| Error::read(path, e))
    }

    pub fn from_reader<B: Read>(reader: &mut B) -> std::io::Result<AcFile> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(AcFile {
            buf: String::from_utf8_lossy(&buf).into_owned(),
        })
    }

    /// Every `BEGIN <name>` ... `END <name>` section, in file order.
    pub fn sections<'a>(&'a self, name: &'a str) -> SectionIter<'a> {
        SectionIter {
            lines: self.buf.lines().enumerate(),
            name,
        }
    }
}

impl From<&str> for AcFile {
    fn from(s: &str) -> Self {
        AcFile { buf: s.to_owned() }
    }
}

fn marker(line: &str) -> Option<(&str, &str)> {
    let cap = SECTION_REGEX.captures(line)?;
    Some((cap.get(1)?.as_str(), cap.get(2)?.as_str()))
}

pub struct SectionIter<'a> {
    lines: Enumerate<Lines<'a>>,
    name: &'a str,
}

impl<'a> Iterator for SectionIter<'a> {
    type Item = Result<Section<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name;
        let begin = loop {
            let (i, line) = self.lines.next()?;
            if marker(line) == Some(("BEGIN", name)) {
                break i + 1;
            }
        };

        let mut rows = Vec::new();
        for (i, line) in &mut self.lines {
            if marker(line) == Some(("END", name)) {
                return Some(Ok(Section { line: begin, rows }));
            }
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if !fields.is_empty() {
                rows.push(Row { line: i + 1, fields });
            }
        }

        Some(Err(Error::UnterminatedSection {
            name: name.to_owned(),
            line: begin,
        }))
    }
}

#[derive(Debug)]
pub struct Section<'a> {
    /// 1-based line number of the `BEGIN` marker.
    pub line: usize,
    pub rows: Vec<Row<'a>>,
}

/// One non-blank line of a section, split on whitespace.
#[derive(Debug)]
pub struct Row<'a> {
    pub line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    pub fn get(&self, i: usize) -> Option<&'a str> {
        self.fields.get(i).copied()
    }
}
