/// One-shot (non-continuous) speech recognition session. A frontend
/// starts a session with the locale tag of the active language and hands
/// the transcript back when recognition ends.
pub trait SpeechInput {
    fn start(&mut self, locale: &str);
    fn stop(&mut self);
    /// The transcript of the last finished session, if any. Consumed.
    fn take_transcript(&mut self) -> Option<String>;
}

/// A recognized transcript is concatenated onto whatever the user already
/// typed, with a single separating space.
pub fn append_transcript(input: &str, transcript: &str) -> String {
    if input.is_empty() {
        transcript.to_string()
    } else {
        format!("{input} {transcript}")
    }
}
