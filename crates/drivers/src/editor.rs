use std::fs;
use std::path::PathBuf;

use photoclip_application::{ApplicationError, DocumentEditor};

/// File-backed implementation of the document-editor port. Opens the
/// note (a missing file starts empty) with the cursor at the end, and
/// persists after every insertion so a crash never loses an insert.
pub struct FileNoteEditor {
    path: PathBuf,
    content: String,
    cursor: usize,
}

impl FileNoteEditor {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let path = path.into();
        let content = if path.exists() {
            fs::read_to_string(&path).map_err(|error| ApplicationError::Io(error.to_string()))?
        } else {
            String::new()
        };
        let cursor = content.len();
        Ok(Self {
            path,
            content,
            cursor,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Moves the cursor, clamping to the content length and snapping
    /// down to the nearest char boundary.
    pub fn set_cursor(&mut self, position: usize) {
        let mut position = position.min(self.content.len());
        while position > 0 && !self.content.is_char_boundary(position) {
            position -= 1;
        }
        self.cursor = position;
    }

    fn persist(&self) -> Result<(), ApplicationError> {
        fs::write(&self.path, &self.content)
            .map_err(|error| ApplicationError::Io(error.to_string()))
    }
}

impl DocumentEditor for FileNoteEditor {
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_at_cursor(&mut self, text: &str) -> Result<(), ApplicationError> {
        self.content.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_note_opens_empty_with_cursor_at_zero() {
        let dir = TempDir::new().expect("tempdir");
        let editor = FileNoteEditor::open(dir.path().join("note.md")).expect("open");
        assert_eq!(editor.content(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn existing_note_opens_with_cursor_at_end() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("note.md");
        fs::write(&path, "# My note\n").expect("write");

        let editor = FileNoteEditor::open(&path).expect("open");
        assert_eq!(editor.cursor(), "# My note\n".len());
    }

    #[test]
    fn insertion_leaves_both_sides_untouched_and_persists() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("note.md");
        fs::write(&path, "before after").expect("write");

        let mut editor = FileNoteEditor::open(&path).expect("open");
        editor.set_cursor("before ".len());
        editor.insert_at_cursor("![](url)\n").expect("insert");

        assert_eq!(editor.content(), "before ![](url)\nafter");
        let on_disk = fs::read_to_string(&path).expect("read back");
        assert_eq!(on_disk, "before ![](url)\nafter");
    }

    #[test]
    fn sequential_insertions_stay_in_order() {
        let dir = TempDir::new().expect("tempdir");
        let mut editor = FileNoteEditor::open(dir.path().join("note.md")).expect("open");

        editor.insert_at_cursor("![](one)\n").expect("insert");
        editor.insert_at_cursor("![](two)\n").expect("insert");
        assert_eq!(editor.content(), "![](one)\n![](two)\n");
    }

    #[test]
    fn set_cursor_snaps_to_char_boundaries() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("note.md");
        fs::write(&path, "héllo").expect("write");

        let mut editor = FileNoteEditor::open(&path).expect("open");
        editor.set_cursor(2); // inside the two-byte 'é'
        assert_eq!(editor.cursor(), 1);
    }
}
