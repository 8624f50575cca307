//! 朗读
//!
//! `SpeechEngine` 是对语音合成能力的抽象，`play` 在其上实现卡片朗读：
//! 先打断正在进行的朗读，再用普通话声音（找不到就用默认声音）慢速读出卡片。

use std::process::{Child, Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::models::Item;

/// 一个可用的合成声音
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    /// 传给合成程序的标识
    pub id: String,
    pub name: String,
    /// 语言标签，如 "cmn"、"zh-cmn"、"zh-CN"
    pub languages: Vec<String>,
}

impl Voice {
    /// 是否为普通话声音。笼统的 "zh" 只在作为主语言时算数，粤语声音也会带 "zh" 标签。
    pub fn is_mandarin(&self) -> bool {
        let primary_is_zh = self
            .languages
            .first()
            .is_some_and(|tag| tag.eq_ignore_ascii_case("zh"));

        primary_is_zh
            || self.languages.iter().any(|tag| {
                let tag = tag.to_ascii_lowercase();
                tag == "cmn"
                    || tag.starts_with("cmn-")
                    || tag.starts_with("zh-cn")
                    || tag.starts_with("zh-cmn")
            })
    }
}

/// 一次朗读请求
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub language: String,
    pub rate: f32,
}

#[cfg_attr(test, mockall::automock)]
pub trait SpeechEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;
    fn cancel(&mut self);
    fn is_speaking(&mut self) -> bool;
    fn voices(&self) -> Vec<Voice>;
}

/// 朗读一张卡片
pub fn play(engine: &mut dyn SpeechEngine, item: &Item, config: &SpeechConfig) {
    if engine.is_speaking() {
        engine.cancel();
    }

    let voice = engine.voices().into_iter().find(Voice::is_mandarin);
    if voice.is_none() {
        debug!("no Mandarin voice available, using default voice");
    }

    let utterance = Utterance {
        text: item.speech_text().to_string(),
        voice,
        language: config.language.clone(),
        rate: config.rate,
    };

    if let Err(e) = engine.speak(&utterance) {
        warn!(error = %e, text = %utterance.text, "speech failed");
    }
}

/// 根据配置创建语音引擎，合成程序不可用时退回静音
pub fn engine_from_config(config: &SpeechConfig) -> Box<dyn SpeechEngine> {
    if !config.enabled {
        info!("speech disabled");
        return Box::new(MutedSpeech);
    }

    match CommandSpeech::detect(&config.program) {
        Ok(engine) => {
            info!(
                program = %config.program,
                voices = engine.voices.len(),
                mandarin = engine
                    .voices
                    .iter()
                    .find(|v| v.is_mandarin())
                    .map(|v| v.name.as_str()),
                "speech ready"
            );
            Box::new(engine)
        }
        Err(e) => {
            warn!(error = %e, "speech unavailable, continuing without audio");
            Box::new(MutedSpeech)
        }
    }
}

/// 不发声的引擎
pub struct MutedSpeech;

impl SpeechEngine for MutedSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        debug!(text = %utterance.text, "muted speech");
        Ok(())
    }

    fn cancel(&mut self) {}

    fn is_speaking(&mut self) -> bool {
        false
    }

    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }
}

/// 调用 espeak-ng 兼容的命令行合成程序，每次朗读一个子进程
pub struct CommandSpeech {
    program: String,
    voices: Vec<Voice>,
    child: Option<Child>,
}

/// espeak 的默认语速 (词/分钟)，对应 rate = 1.0
const NORMAL_WPM: f32 = 175.0;
const MIN_WPM: u32 = 80;
const MAX_WPM: u32 = 450;

impl CommandSpeech {
    /// 运行 `<program> --voices` 探测程序并读取声音列表
    pub fn detect(program: &str) -> Result<Self, SpeechError> {
        let output = Command::new(program)
            .arg("--voices")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| SpeechError::Unavailable {
                program: program.to_string(),
                source,
            })?;

        Ok(Self {
            program: program.to_string(),
            voices: parse_voice_list(&String::from_utf8_lossy(&output.stdout)),
            child: None,
        })
    }

    fn words_per_minute(rate: f32) -> u32 {
        ((NORMAL_WPM * rate).round() as u32).clamp(MIN_WPM, MAX_WPM)
    }
}

impl SpeechEngine for CommandSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        let mut cmd = Command::new(&self.program);
        if let Some(voice) = &utterance.voice {
            cmd.arg("-v").arg(&voice.id);
        }
        cmd.arg("-s")
            .arg(Self::words_per_minute(utterance.rate).to_string())
            .arg("--")
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!(
            text = %utterance.text,
            voice = utterance.voice.as_ref().map(|v| v.id.as_str()),
            language = %utterance.language,
            "speaking"
        );
        self.child = Some(cmd.spawn()?);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                debug!(error = %e, "speech process already gone");
            }
            // 回收子进程，避免僵尸进程
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
        match self.child.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(_) => {
                self.child = None;
                false
            }
            None => false,
        }
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// 解析 `espeak-ng --voices` 的输出
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  cmn             --/M      Chinese_(Mandarin) sit/cmn              (zh-cmn 5)(zh 5)
/// ```
pub fn parse_voice_list(output: &str) -> Vec<Voice> {
    output
        .lines()
        .filter(|line| !line.trim_start().starts_with("Pty"))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let _priority = fields.next()?;
            let language = fields.next()?;
            let _age_gender = fields.next()?;
            let name = fields.next()?;
            let _file = fields.next()?;
            let others: Vec<&str> = fields.collect();

            let mut languages = vec![language.to_string()];
            languages.extend(
                others
                    .join(" ")
                    .split('(')
                    .filter_map(|chunk| chunk.split_whitespace().next())
                    .map(str::to_string),
            );

            Some(Voice {
                id: language.to_string(),
                name: name.to_string(),
                languages,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::always;

    const VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  yue             --/M      Chinese_(Cantonese) sit/yue             (zh-yue 5)(zh 8)
 5  cmn             --/M      Chinese_(Mandarin) sit/cmn              (zh-cmn 5)(zh 5)
 2  en-us           --/M      English_(America)  gmw/en-US            (en 3)
";

    fn mandarin() -> Voice {
        Voice {
            id: "cmn".to_string(),
            name: "Chinese_(Mandarin)".to_string(),
            languages: vec!["cmn".to_string(), "zh-cmn".to_string(), "zh".to_string()],
        }
    }

    fn english() -> Voice {
        Voice {
            id: "en-us".to_string(),
            name: "English_(America)".to_string(),
            languages: vec!["en-us".to_string()],
        }
    }

    #[test]
    fn test_parse_voice_list() {
        let voices = parse_voice_list(VOICES);

        assert_eq!(voices.len(), 4);
        assert_eq!(voices[0].id, "af");
        assert_eq!(voices[0].languages, vec!["af"]);
        assert_eq!(voices[2], mandarin());
    }

    #[test]
    fn test_mandarin_detection_skips_cantonese() {
        let voices = parse_voice_list(VOICES);
        let found = voices.into_iter().find(Voice::is_mandarin).unwrap();
        assert_eq!(found.id, "cmn");
    }

    #[test]
    fn test_words_per_minute_clamped() {
        assert_eq!(CommandSpeech::words_per_minute(0.1), MIN_WPM);
        assert_eq!(CommandSpeech::words_per_minute(1.0), 175);
        assert_eq!(CommandSpeech::words_per_minute(10.0), MAX_WPM);
    }

    #[test]
    fn test_play_cancels_and_uses_mandarin_voice() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_is_speaking().times(1).return_const(true);
        engine.expect_cancel().times(1).return_const(());
        engine
            .expect_voices()
            .return_const(vec![english(), mandarin()]);
        engine
            .expect_speak()
            .withf(|u| {
                u.text == "玻"
                    && u.voice.as_ref().map(|v| v.id.as_str()) == Some("cmn")
                    && u.language == "zh-CN"
                    && u.rate == 0.1
            })
            .times(1)
            .returning(|_| Ok(()));

        let item = Item::new("b", "🎈", "bàba", Some("玻"));
        play(&mut engine, &item, &SpeechConfig::default());
    }

    #[test]
    fn test_play_without_mandarin_voice_uses_default() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_is_speaking().return_const(false);
        engine.expect_cancel().never();
        engine.expect_voices().return_const(vec![english()]);
        engine
            .expect_speak()
            .withf(|u| u.text == "ang" && u.voice.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let item = Item::new("ang", "🐑", "yáng", None);
        play(&mut engine, &item, &SpeechConfig::default());
    }

    #[test]
    fn test_play_swallows_speech_errors() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_is_speaking().return_const(false);
        engine.expect_voices().return_const(Vec::<Voice>::new());
        engine
            .expect_speak()
            .with(always())
            .times(1)
            .returning(|_| Err(SpeechError::Spawn(std::io::Error::other("boom"))));

        let item = Item::new("o", "🐌", "wōniú", Some("喔"));
        play(&mut engine, &item, &SpeechConfig::default());
    }

    /// 无视参数、睡几秒的假合成程序
    #[cfg(unix)]
    fn sleepy_program() -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir().join(format!("pinyin-cards-speak-{}.sh", std::process::id()));
        std::fs::write(&path, "#!/bin/sh\nexec sleep 5\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_command_speech_cancel_stops_child() {
        let program = sleepy_program();
        let mut engine = CommandSpeech {
            program: program.display().to_string(),
            voices: Vec::new(),
            child: None,
        };
        let utterance = Utterance {
            text: "玻".to_string(),
            voice: None,
            language: "zh-CN".to_string(),
            rate: 0.1,
        };

        assert!(!engine.is_speaking());
        engine.speak(&utterance).unwrap();
        assert!(engine.is_speaking());

        engine.cancel();
        assert!(!engine.is_speaking());

        // play 先打断正在进行的朗读，再开始新的
        engine.speak(&utterance).unwrap();
        let item = Item::new("p", "🐴", "pǐ", Some("坡"));
        play(&mut engine, &item, &SpeechConfig::default());
        assert!(engine.is_speaking());

        engine.cancel();
        assert!(!engine.is_speaking());
        let _ = std::fs::remove_file(program);
    }

    #[test]
    fn test_muted_engine_is_silent() {
        let mut engine = MutedSpeech;
        let item = Item::new("e", "🦢", "é", Some("鹅"));
        play(&mut engine, &item, &SpeechConfig::default());
        assert!(!engine.is_speaking());
        assert!(engine.voices().is_empty());
    }
}
