//! Assessment service - Runs the SODA analysis pipeline end-to-end
//!
//! Orchestrates the complete analysis flow:
//! 1. Validate the request
//! 2. Transcode the upload to the canonical waveform
//! 3. Transcribe the recording (fatal on failure)
//! 4. Segment and phonetically map both words
//! 5. Classify the divergence into one SODA category
//! 6. Assemble the assessment record

use std::{fmt, sync::Arc, time::Instant};

use domain::classification::classify;
use domain::entities::PronunciationAssessment;
use domain::value_objects::{AcousticSummary, AudioFormat, Syllable};
use domain::{Alignment, DISTORTION_THRESHOLD, align_phonetic};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{
        AcousticAnalysisPort, AudioTranscoderPort, DistortionMeasurement, PhoneticMappingPort,
        SegmenterPort, TranscriptionPort,
    },
};

/// Configuration for the assessment pipeline
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Distortion score above which an equal-length mismatch is Distortion
    pub distortion_threshold: f64,
    /// Language hint passed to the recognizer (e.g., "kn")
    pub language_hint: Option<String>,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            distortion_threshold: DISTORTION_THRESHOLD,
            language_hint: Some("kn".to_string()),
        }
    }
}

/// Result of one assessment run
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    /// The classified assessment record
    pub assessment: PronunciationAssessment,
    /// Acoustic summary statistics, when the analyzer produced them
    pub acoustic: Option<AcousticSummary>,
    /// Character-level diagnostic alignment of the flattened phonetic
    /// strings; informational only
    pub phonetic_diagnostic: Alignment,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Service running the pronunciation assessment pipeline
pub struct AssessmentService {
    segmenter: Arc<dyn SegmenterPort>,
    phonetic: Arc<dyn PhoneticMappingPort>,
    transcription: Arc<dyn TranscriptionPort>,
    acoustic: Arc<dyn AcousticAnalysisPort>,
    transcoder: Arc<dyn AudioTranscoderPort>,
    config: AssessmentConfig,
}

impl fmt::Debug for AssessmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AssessmentService {
    /// Create a new assessment service with default configuration
    pub fn new(
        segmenter: Arc<dyn SegmenterPort>,
        phonetic: Arc<dyn PhoneticMappingPort>,
        transcription: Arc<dyn TranscriptionPort>,
        acoustic: Arc<dyn AcousticAnalysisPort>,
        transcoder: Arc<dyn AudioTranscoderPort>,
    ) -> Self {
        Self {
            segmenter,
            phonetic,
            transcription,
            acoustic,
            transcoder,
            config: AssessmentConfig::default(),
        }
    }

    /// Create an assessment service with custom configuration
    pub fn with_config(
        segmenter: Arc<dyn SegmenterPort>,
        phonetic: Arc<dyn PhoneticMappingPort>,
        transcription: Arc<dyn TranscriptionPort>,
        acoustic: Arc<dyn AcousticAnalysisPort>,
        transcoder: Arc<dyn AudioTranscoderPort>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            segmenter,
            phonetic,
            transcription,
            acoustic,
            transcoder,
            config,
        }
    }

    /// Assess one recording of a target word
    ///
    /// Returns a complete, classified assessment or a structured error —
    /// never a partial record. Only the acoustic signal degrades softly:
    /// a failed summary becomes `None`, a failed distortion measurement
    /// becomes the neutral score.
    #[instrument(skip(self, audio), fields(
        target_word = %target_word,
        audio_size = audio.len(),
        format = %format
    ))]
    pub async fn assess(
        &self,
        target_word: &str,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<AssessmentOutcome, ApplicationError> {
        let start = Instant::now();

        let target_word = target_word.trim();
        if target_word.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "missing target word".to_string(),
            ));
        }
        if audio.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "missing audio data".to_string(),
            ));
        }

        // Step 1: Normalize the upload to the canonical waveform
        let waveform = if format.is_canonical() {
            audio
        } else {
            debug!("Transcoding upload to canonical waveform");
            self.transcoder.to_wav(audio, format).await?
        };

        // Step 2: Acoustic summary (informational; degrade on failure)
        let acoustic = match self.acoustic.summary(&waveform).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(error = %e, "Acoustic summary unavailable");
                None
            },
        };

        // Step 3: Transcribe the recording (fatal on failure)
        info!("Transcribing recording");
        let transcription = self
            .transcription
            .transcribe(
                waveform.clone(),
                AudioFormat::Wav,
                self.config.language_hint.clone(),
            )
            .await?;
        let spoken_text = transcription.text.trim().to_owned();
        if spoken_text.is_empty() {
            return Err(ApplicationError::Transcription(
                "no speech recognized".to_string(),
            ));
        }
        debug!(
            spoken_text = %spoken_text,
            confidence = ?transcription.confidence,
            "Transcription complete"
        );

        // Step 4: Segment and phonetically map both sides
        let target_syllables = self.phonetic_syllables(target_word)?;
        let spoken_syllables = self.phonetic_syllables(&spoken_text)?;

        let assessment =
            PronunciationAssessment::new(target_word, target_syllables, spoken_syllables);

        // Step 5: Char-level diagnostic tally over the flattened strings.
        // The tally never drives the category; the length branches do.
        let phonetic_diagnostic = align_phonetic(&assessment.ipa_target, &assessment.ipa_spoken);
        debug!(summary = ?phonetic_diagnostic.summary, "Phoneme-level diagnostic alignment");

        // Step 6: Distortion score, fetched only when the syllable counts
        // match. Length-mismatched utterances never consult the analyzer,
        // so their recorded score stays 0.0.
        let distortion = if assessment.target_syllables.len() == assessment.spoken_syllables.len()
        {
            match self.acoustic.distortion(&waveform).await {
                Ok(measurement) => measurement,
                Err(e) => {
                    warn!(error = %e, "Distortion analysis failed, assuming not distorted");
                    DistortionMeasurement::neutral()
                },
            }
        } else {
            DistortionMeasurement::neutral()
        };

        // Step 7: Classify and merge the decision once
        let classification = classify(
            &assessment.target_syllables,
            &assessment.spoken_syllables,
            distortion.score,
            self.config.distortion_threshold,
        );
        info!(
            category = %classification.category,
            distortion_score = classification.distortion_score.value(),
            error_syllables = classification.error_syllables.len(),
            "Pronunciation classified"
        );

        let mut assessment = assessment;
        assessment.apply(classification);

        #[allow(clippy::cast_possible_truncation)]
        let processing_time_ms = start.elapsed().as_millis() as u64;

        Ok(AssessmentOutcome {
            assessment,
            acoustic,
            phonetic_diagnostic,
            processing_time_ms,
        })
    }

    /// Check if the speech recognizer is reachable
    pub async fn is_available(&self) -> bool {
        self.transcription.is_available().await
    }

    /// Get the current configuration
    #[must_use]
    pub const fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Update the configuration
    pub fn set_config(&mut self, config: AssessmentConfig) {
        self.config = config;
    }

    /// Segment a word and map each orthographic syllable to its phonetic form
    fn phonetic_syllables(&self, text: &str) -> Result<Vec<Syllable>, ApplicationError> {
        self.segmenter
            .segment(text)?
            .iter()
            .map(|akshara| {
                self.phonetic
                    .to_phonetic(akshara.as_str())
                    .map(Syllable::from)
            })
            .collect()
    }
}
