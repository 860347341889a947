use thiserror::Error;

/// One problem encountered during a marshal walk.
#[derive(Debug, Error)]
pub enum MarshalIssue {
	/// Node kind has no renderer; nothing was emitted for it.
	#[error("skip unsupported type at key({path})")]
	Unsupported {
		/// JSON-path of the skipped node.
		path: String,
	},
	/// Writing a row to the sink failed.
	#[error("write: {0}")]
	Write(#[from] std::io::Error),
}

/// Issues collected over one marshal call, joined by newlines when displayed.
#[derive(Debug, Default, Error)]
#[error("{}", join_issues(.issues))]
pub struct MarshalErrors {
	issues: Vec<MarshalIssue>,
}

impl MarshalErrors {
	/// Collected issues in encounter order.
	pub fn issues(&self) -> &[MarshalIssue] {
		&self.issues
	}

	/// Number of collected issues.
	pub fn len(&self) -> usize {
		self.issues.len()
	}

	/// Whether nothing went wrong.
	pub fn is_empty(&self) -> bool {
		self.issues.is_empty()
	}

	pub(crate) fn push(&mut self, issue: MarshalIssue) {
		self.issues.push(issue);
	}

	pub(crate) fn extend(&mut self, issues: impl IntoIterator<Item = MarshalIssue>) {
		self.issues.extend(issues);
	}

	pub(crate) fn into_result(self) -> Result<(), Self> {
		if self.issues.is_empty() { Ok(()) } else { Err(self) }
	}
}

fn join_issues(issues: &[MarshalIssue]) -> String {
	issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
