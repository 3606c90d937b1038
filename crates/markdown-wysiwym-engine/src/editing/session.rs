use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::{debug, info};
use relative_path::{RelativePath, RelativePathBuf};
use uuid::Uuid;
use xi_rope::{Rope, delta::Builder};

use crate::annotations::{AnnotationSet, AnnotationTracker, LineRange};
use crate::io;
use crate::parsing::{ParserOptions, SpanParser, StyledSpan};
use crate::persistence::{self, DocumentMetadata};

use super::delta::{EditDelta, EditError, TextChange, check_byte_range};
use super::patch::Patch;

/// Handle for an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No open document with id {0}")]
    UnknownDocument(DocumentId),
}

/// State of one open document: its text, its annotation ranges and the
/// ordering of the edits applied to both.
pub struct DocumentSession {
    id: DocumentId,
    path: RelativePathBuf,
    buffer: Rope,
    tracker: AnnotationTracker,
    parser: Arc<SpanParser>,
    version: u64,
}

impl DocumentSession {
    fn new(
        id: DocumentId,
        path: RelativePathBuf,
        text: &str,
        metadata: &DocumentMetadata,
        parser: Arc<SpanParser>,
    ) -> Self {
        Self {
            id,
            path,
            buffer: Rope::from(text),
            tracker: AnnotationTracker::new(metadata.to_set()),
            parser,
            version: 0,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len()) + 1
    }

    /// Text of `line` without its terminator, or `None` past the end.
    pub fn line(&self, line: usize) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }
        let raw = self
            .buffer
            .slice_to_cow(self.line_start(line)..self.line_start(line + 1));
        let text = raw.strip_suffix('\n').unwrap_or(&raw);
        Some(text.strip_suffix('\r').unwrap_or(text).to_string())
    }

    /// Byte offset where `line` starts; the document length past the last line.
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.line_count() {
            self.buffer.len()
        } else {
            self.buffer.offset_of_line(line)
        }
    }

    /// Replaces `range` (bytes) with `text`, moving annotation ranges with it.
    pub fn apply_edit(&mut self, range: Range<usize>, text: &str) -> Result<Patch, EditError> {
        let delta = EditDelta::from_byte_edit(&self.buffer, range.clone(), text)?;
        let change = TextChange::new(delta.start_line, delta.end_line_exclusive, text);
        self.tracker.apply(self.tracker.next_sequence(), &change)?;
        Ok(self.commit(range, text, delta))
    }

    /// Applies host notification `seq`: lines `[start, end_exclusive)`, each
    /// with its terminator, are replaced by the change's text.
    pub fn apply_line_change(&mut self, seq: u64, change: &TextChange) -> Result<Patch, EditError> {
        let count = self.line_count();
        if change.replaced_line_start > change.replaced_line_end_exclusive
            || change.replaced_line_end_exclusive > count
        {
            return Err(EditError::LinesOutOfBounds {
                start: change.replaced_line_start,
                end: change.replaced_line_end_exclusive,
                count,
            });
        }
        let range = self.line_start(change.replaced_line_start)
            ..self.line_start(change.replaced_line_end_exclusive);
        check_byte_range(&self.buffer, &range)?;

        let delta = self.tracker.apply(seq, change)?;
        Ok(self.commit(range, &change.inserted_text, delta))
    }

    fn commit(&mut self, range: Range<usize>, text: &str, delta: EditDelta) -> Patch {
        let mut builder = Builder::new(self.buffer.len());
        builder.replace(range, Rope::from(text));
        self.buffer = builder.build().apply(&self.buffer);
        self.version += 1;
        Patch {
            delta,
            version: self.version,
        }
    }

    /// Sequence number the next host notification must carry.
    pub fn next_sequence(&self) -> u64 {
        self.tracker.next_sequence()
    }

    /// Fresh spans for the current text.
    pub fn spans(&self) -> Vec<StyledSpan> {
        self.parser.parse(&self.text())
    }

    pub fn tag_external(&mut self, range: LineRange) {
        self.tracker.add(range);
    }

    pub fn untag(&mut self, range: LineRange) {
        self.tracker.remove(range);
    }

    pub fn is_external(&self, line: usize) -> bool {
        self.tracker.query(line)
    }

    pub fn annotations(&self) -> &AnnotationSet {
        self.tracker.set()
    }

    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata::from_set(self.tracker.set())
    }
}

/// Owns every open [`DocumentSession`], keyed by [`DocumentId`].
pub struct Workspace {
    parser: Arc<SpanParser>,
    sessions: HashMap<DocumentId, DocumentSession>,
}

impl Workspace {
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            parser: Arc::new(SpanParser::new(options)),
            sessions: HashMap::new(),
        }
    }

    /// Opens a session over `text`, seeding its ranges from `metadata`.
    pub fn open(
        &mut self,
        path: RelativePathBuf,
        text: &str,
        metadata: &DocumentMetadata,
    ) -> DocumentId {
        let id = DocumentId::new();
        debug!(
            "Opening {path} as {id} with {} external range(s)",
            metadata.external.len()
        );
        let session = DocumentSession::new(id, path, text, metadata, Arc::clone(&self.parser));
        self.sessions.insert(id, session);
        id
    }

    /// Reads a document and its sidecar from disk and opens a session.
    pub fn open_file(
        &mut self,
        notes_root: &Path,
        metadata_dir: &str,
        path: &RelativePath,
    ) -> anyhow::Result<DocumentId> {
        let text = io::read_file(path, notes_root)
            .with_context(|| format!("Failed to read {path}"))?;
        let sidecar = persistence::sidecar_path(notes_root, metadata_dir, path);
        let metadata = persistence::load_metadata(&sidecar)?;
        Ok(self.open(path.to_relative_path_buf(), &text, &metadata))
    }

    /// Writes a session's text and sidecar back to disk.
    pub fn save(&self, id: DocumentId, notes_root: &Path, metadata_dir: &str) -> anyhow::Result<()> {
        let session = self.get(id)?;
        io::write_file(session.path(), notes_root, &session.text())
            .with_context(|| format!("Failed to write {}", session.path()))?;
        let sidecar = persistence::sidecar_path(notes_root, metadata_dir, session.path());
        persistence::save_metadata(&sidecar, &session.metadata())?;
        info!("Saved {}", session.path());
        Ok(())
    }

    /// Drops a session, returning its final metadata for persisting.
    pub fn close(&mut self, id: DocumentId) -> Result<DocumentMetadata, SessionError> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or(SessionError::UnknownDocument(id))?;
        debug!("Closed {} ({id})", session.path());
        Ok(session.metadata())
    }

    pub fn get(&self, id: DocumentId) -> Result<&DocumentSession, SessionError> {
        self.sessions
            .get(&id)
            .ok_or(SessionError::UnknownDocument(id))
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Result<&mut DocumentSession, SessionError> {
        self.sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownDocument(id))
    }

    /// The session already open for `path`, if any.
    pub fn find(&self, path: &RelativePath) -> Option<DocumentId> {
        self.sessions
            .values()
            .find(|s| s.path() == path)
            .map(DocumentSession::id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&ParserOptions::default())
    }
}
