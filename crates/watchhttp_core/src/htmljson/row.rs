use std::io::Write;

use crate::htmljson::MarshalIssue;

/// Accumulates fragments of one logical row and writes it wrapped on flush.
///
/// Every fragment written must eventually be followed by a `flush`.
pub(crate) struct RowWriter<'a> {
	row: String,
	sink: &'a mut dyn Write,
	wrap: &'a (dyn Fn(&str, usize) -> String + Send + Sync),
	issues: Vec<MarshalIssue>,
}

impl<'a> RowWriter<'a> {
	pub(crate) fn new(sink: &'a mut dyn Write, wrap: &'a (dyn Fn(&str, usize) -> String + Send + Sync)) -> Self {
		Self {
			row: String::new(),
			sink,
			wrap,
			issues: Vec::new(),
		}
	}

	/// Append a fragment to the current row.
	pub(crate) fn write(&mut self, fragment: &str) {
		self.row.push_str(fragment);
	}

	/// Terminate the current row, wrap it at `depth`, and write it to the sink.
	pub(crate) fn flush(&mut self, depth: usize) {
		self.row.push('\n');
		let wrapped = (self.wrap)(&self.row, depth);
		if let Err(err) = self.sink.write_all(wrapped.as_bytes()) {
			self.issues.push(MarshalIssue::Write(err));
		}
		self.row.clear();
	}

	/// Sink failures seen so far.
	pub(crate) fn into_issues(self) -> Vec<MarshalIssue> {
		self.issues
	}
}
