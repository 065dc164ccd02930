use roadprompt::prompt::{BufReadSource, Prompt};
use std::io::Cursor;

pub type ScriptedSource = BufReadSource<Cursor<String>>;
pub type ScriptedPrompt = Prompt<ScriptedSource, Vec<u8>>;

/// Builds an engine that reads the given lines and records its output.
pub fn scripted(lines: &[&str]) -> ScriptedPrompt {
    let input: String = lines.iter().map(|line| format!("{line}\n")).collect();
    Prompt::new(BufReadSource::new(Cursor::new(input)), Vec::new())
}

pub fn transcript(prompt: &ScriptedPrompt) -> String {
    String::from_utf8_lossy(prompt.output()).into_owned()
}
