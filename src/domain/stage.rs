use crate::domain::prompts;

/// One step of the note-refinement pipeline.
///
/// Each stage carries a fixed prompt pair and the ordered list of placeholder
/// fields its user template expects in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    TranscriptNotes,
    PointsOfEmphasis,
    ActionItems,
    FinalNotes,
}

impl PipelineStage {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::TranscriptNotes => prompts::TRANSCRIPT_NOTES_SYSTEM,
            Self::PointsOfEmphasis => prompts::POINTS_OF_EMPHASIS_SYSTEM,
            Self::ActionItems => prompts::ACTION_ITEMS_SYSTEM,
            Self::FinalNotes => prompts::FINAL_NOTES_SYSTEM,
        }
    }

    pub fn user_template(&self) -> &'static str {
        match self {
            Self::TranscriptNotes => prompts::TRANSCRIPT_NOTES_USER,
            Self::PointsOfEmphasis => prompts::POINTS_OF_EMPHASIS_USER,
            Self::ActionItems => prompts::ACTION_ITEMS_USER,
            Self::FinalNotes => prompts::FINAL_NOTES_USER,
        }
    }

    /// Request-body fields that must be present, in validation order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::TranscriptNotes => &["transcript"],
            Self::PointsOfEmphasis => &["userNotes", "transcriptNotes"],
            Self::ActionItems => &["transcriptNotes", "userNotes"],
            Self::FinalNotes => &[
                "userNotes",
                "transcriptNotes",
                "pointsOfEmphasis",
                "actionItems",
            ],
        }
    }

    /// Human-readable message used in the error envelope when this stage fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::TranscriptNotes => "Error generating transcript notes",
            Self::PointsOfEmphasis => "Error generating points of emphasis",
            Self::ActionItems => "Error extracting action items",
            Self::FinalNotes => "Error finalizing notes",
        }
    }
}
