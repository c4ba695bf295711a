use crate::RowRecord;

// Root row for presentation P1 / experience E1 / content C1
pub fn root_record() -> RowRecord {
    RowRecord::new()
        .with("Type", "Root")
        .with("PresentationID", "P1")
        .with("ExperienceID", "E1")
        .with("ContentID", "C1")
        .with("Experience Type", "Movie")
        .with("Experience Sub Type", "Full")
}

// 1080p video track
pub fn video_record(track_id: &str) -> RowRecord {
    RowRecord::new()
        .with("Type", "Video")
        .with("Track ID", track_id)
        .with("Type/Format", "primary")
        .with("Language", "en")
        .with("Width", 1920.0)
        .with("Height", 1080.0)
        .with("Location", "v.mp4")
}

// English audio track
pub fn audio_record(track_id: &str) -> RowRecord {
    RowRecord::new()
        .with("Type", "Audio")
        .with("Track ID", track_id)
        .with("Type/Format", "primary")
        .with("Language", "en")
        .with("Location", "a.mp4")
}

// Subtitle track, with an optional frame rate cell
pub fn subtitle_record(track_id: &str, frame_rate: Option<f64>) -> RowRecord {
    let record = RowRecord::new()
        .with("Type", "Subtitle")
        .with("Track ID", track_id)
        .with("Format", "SRT")
        .with("Type/Format", "normal")
        .with("Language", "ko")
        .with("Location", format!("{track_id}.srt"));
    match frame_rate {
        Some(rate) => record.with("FrameRate", rate),
        None => record,
    }
}

// Root, one video, one audio, a subtitle with a frame rate and one without
pub fn sample_records() -> Vec<RowRecord> {
    vec![
        root_record(),
        video_record("V1"),
        audio_record("A1"),
        subtitle_record("S1", Some(23.976)),
        subtitle_record("S2", None),
    ]
}
