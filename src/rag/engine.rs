//! The answering engine: search, assemble, generate, package.

use super::context;
use super::{AnswerResult, Source};
use crate::corpus::{self, TranscriptRecord, TranscriptSegment};
use crate::error::{PodbotnikError, Result};
use crate::generation::AnswerGenerator;
use crate::registry::{Episode, EpisodeRegistry, EpisodeSummary};
use crate::search::{IndexedDocument, SearchHit, SearchIndex};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Default number of transcript segments used as context.
pub const DEFAULT_CONTEXT_SEGMENTS: usize = 3;

/// Default output budget for generated answers, in tokens.
pub const DEFAULT_ANSWER_TOKENS: u32 = 400;

/// Fields the question is matched against.
const SEARCH_FIELDS: &[&str] = &["episode_title", "text"];

/// Answer returned when retrieval finds nothing. Not an error: absence of
/// matches is an expected outcome.
const NO_MATCH_ANSWER: &str =
    "I couldn't find relevant information in the podcast transcripts to answer your question.";

/// Engine-internal prompt template; not configurable per call.
fn render_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a helpful podcast assistant. Based on the provided transcript segments, \
answer the user's question concisely and accurately. Keep your answer brief (2-3 sentences max).\n\
\n\
Question: {question}\n\
\n\
Relevant transcript excerpts:\n\
{context}\n\
\n\
Answer:"
    )
}

/// Retrieval-augmented answering engine over a transcript corpus.
///
/// Owns the episode registry; retrieval and generation are pluggable
/// collaborators. All per-call state is local, so concurrent `answer` calls
/// against a loaded corpus do not interfere.
pub struct AnswerEngine {
    registry: Arc<EpisodeRegistry>,
    index: Arc<dyn SearchIndex>,
    generator: Arc<dyn AnswerGenerator>,
    max_answer_tokens: u32,
}

impl AnswerEngine {
    /// Create an engine over the given retrieval and generation backends.
    pub fn new(index: Arc<dyn SearchIndex>, generator: Arc<dyn AnswerGenerator>) -> Self {
        Self {
            registry: Arc::new(EpisodeRegistry::new()),
            index,
            generator,
            max_answer_tokens: DEFAULT_ANSWER_TOKENS,
        }
    }

    /// Set the output budget for generated answers.
    pub fn with_max_answer_tokens(mut self, max_answer_tokens: u32) -> Self {
        self.max_answer_tokens = max_answer_tokens;
        self
    }

    /// Load a transcripts JSON file and index every episode.
    ///
    /// The file is validated in full before anything is committed; returns
    /// the number of episodes ingested.
    pub async fn load_corpus(&self, path: &Path) -> Result<usize> {
        let records = corpus::read_corpus(path)?;
        let count = records.len();

        for record in records {
            self.ingest(record).await?;
        }

        info!(count, "Loaded transcript corpus");
        Ok(count)
    }

    /// Add or overwrite a single episode with a whole-transcript document.
    pub async fn add_episode(&self, record: TranscriptRecord) -> Result<()> {
        self.ingest(record).await
    }

    /// Add or overwrite an episode as timestamped segments.
    ///
    /// Each segment is a separate retrieval unit, so citations carry real
    /// timestamps and deep links.
    pub async fn add_episode_segments(
        &self,
        record: TranscriptRecord,
        segments: Vec<TranscriptSegment>,
    ) -> Result<()> {
        let transcript = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        self.registry.put(Episode {
            episode_id: record.episode_id.clone(),
            title: record.episode_title.clone(),
            number: record.episode_number,
            transcript,
            video_url: record.video_url.clone(),
            audio_url: record.audio_url.clone(),
        });

        let docs = segments
            .into_iter()
            .map(|segment| IndexedDocument {
                episode_id: record.episode_id.clone(),
                episode_title: record.episode_title.clone(),
                episode_number: record.episode_number,
                text: segment.text,
                start_time: Some(segment.start_time),
                end_time: Some(segment.end_time),
            })
            .collect();

        self.index.index(docs).await
    }

    async fn ingest(&self, record: TranscriptRecord) -> Result<()> {
        self.registry.put(Episode {
            episode_id: record.episode_id.clone(),
            title: record.episode_title.clone(),
            number: record.episode_number,
            transcript: record.transcript.clone(),
            video_url: record.video_url,
            audio_url: record.audio_url,
        });

        self.index
            .index(vec![IndexedDocument {
                episode_id: record.episode_id,
                episode_title: record.episode_title,
                episode_number: record.episode_number,
                text: record.transcript,
                start_time: None,
                end_time: None,
            }])
            .await
    }

    /// Answer a question grounded in the transcript corpus.
    ///
    /// `max_context_segments == 0` means "use the default"; the permissive
    /// reading keeps the API surface forgiving for thin front-ends.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn answer(
        &self,
        question: &str,
        max_context_segments: usize,
    ) -> Result<AnswerResult> {
        if question.trim().is_empty() {
            return Err(PodbotnikError::InvalidInput(
                "Question cannot be empty".to_string(),
            ));
        }

        let limit = if max_context_segments == 0 {
            DEFAULT_CONTEXT_SEGMENTS
        } else {
            max_context_segments
        };

        let hits = self
            .index
            .search(question, SEARCH_FIELDS, limit)
            .await
            .map_err(|e| PodbotnikError::Search(e.to_string()))?;

        if hits.is_empty() {
            debug!("No matching transcript segments");
            return Ok(AnswerResult {
                answer: NO_MATCH_ANSWER.to_string(),
                sources: Vec::new(),
                context_used: 0,
            });
        }

        let (context_text, sources) = context::assemble(&hits, &self.registry);
        let prompt = render_prompt(question, &context_text);

        let answer = self
            .generator
            .generate(&prompt, self.max_answer_tokens)
            .await?;

        debug!(sources = sources.len(), "Generated answer");

        Ok(AnswerResult {
            answer,
            context_used: sources.len(),
            sources,
        })
    }

    /// Search the corpus directly, without answer generation.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        if query.trim().is_empty() {
            return Err(PodbotnikError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }
        self.index.search(query, SEARCH_FIELDS, max_results).await
    }

    /// List all loaded episodes, ascending by episode number.
    ///
    /// Pure registry delegate; succeeds on an empty corpus.
    pub fn list_episodes(&self) -> Vec<EpisodeSummary> {
        self.registry.list()
    }

    /// Sources for the hits of a query, in ranking order (display helper).
    pub fn sources_for(&self, hits: &[SearchHit]) -> Vec<Source> {
        let (_, sources) = context::assemble(hits, &self.registry);
        sources
    }

    /// The episode registry shared with front-ends.
    pub fn registry(&self) -> Arc<EpisodeRegistry> {
        Arc::clone(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MemoryIndex;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Index stub returning a fixed hit list, recording the requested limit.
    struct FixedIndex {
        hits: Vec<SearchHit>,
        last_limit: Mutex<Option<usize>>,
    }

    impl FixedIndex {
        fn new(hits: Vec<SearchHit>) -> Self {
            Self {
                hits,
                last_limit: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SearchIndex for FixedIndex {
        async fn index(&self, _documents: Vec<IndexedDocument>) -> Result<()> {
            Ok(())
        }

        async fn search(
            &self,
            _query: &str,
            _fields: &[&str],
            max_results: usize,
        ) -> Result<Vec<SearchHit>> {
            *self.last_limit.lock().unwrap() = Some(max_results);
            Ok(self.hits.iter().take(max_results).cloned().collect())
        }
    }

    /// Generator stub that records whether it was invoked.
    struct FixedGenerator {
        reply: String,
        called: AtomicBool,
    }

    impl FixedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                called: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl AnswerGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
            self.called.store(true, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl AnswerGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
            Err(PodbotnikError::Generation("backend unreachable".to_string()))
        }
    }

    fn hit(id: &str, title: &str, number: u32, text: &str) -> SearchHit {
        IndexedDocument {
            episode_id: id.to_string(),
            episode_title: title.to_string(),
            episode_number: number,
            text: text.to_string(),
            start_time: None,
            end_time: None,
        }
    }

    fn record(id: &str, title: &str, number: u32, transcript: &str) -> TranscriptRecord {
        TranscriptRecord {
            episode_id: id.to_string(),
            episode_title: title.to_string(),
            episode_number: number,
            transcript: transcript.to_string(),
            video_url: String::new(),
            audio_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_empty_question_rejected_before_io() {
        let generator = Arc::new(FixedGenerator::new("answer"));
        let engine = AnswerEngine::new(
            Arc::new(FixedIndex::new(vec![hit("ep1", "T", 1, "text")])),
            generator.clone(),
        );

        let err = engine.answer("   ", 3).await.unwrap_err();
        assert!(matches!(err, PodbotnikError::InvalidInput(_)));
        assert!(!generator.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_no_hits_returns_sentinel_without_generation() {
        let generator = Arc::new(FixedGenerator::new("should not appear"));
        let engine = AnswerEngine::new(Arc::new(FixedIndex::new(vec![])), generator.clone());

        let result = engine.answer("anything?", 3).await.unwrap();
        assert_eq!(result.answer, NO_MATCH_ANSWER);
        assert!(result.sources.is_empty());
        assert_eq!(result.context_used, 0);
        assert!(!generator.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_sources_preserve_ranking_order() {
        let hits = vec![
            hit("ep2", "Second", 2, "most relevant"),
            hit("ep1", "First", 1, "less relevant"),
            hit("ep3", "Third", 3, "least relevant"),
        ];
        let engine = AnswerEngine::new(
            Arc::new(FixedIndex::new(hits)),
            Arc::new(FixedGenerator::new("the answer")),
        );

        let result = engine.answer("question?", 3).await.unwrap();
        assert_eq!(result.answer, "the answer");
        assert_eq!(result.context_used, result.sources.len());
        let titles: Vec<&str> = result
            .sources
            .iter()
            .map(|s| s.episode_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Second", "First", "Third"]);
    }

    #[tokio::test]
    async fn test_zero_segments_uses_default_limit() {
        let index = Arc::new(FixedIndex::new(vec![hit("ep1", "T", 1, "text")]));
        let engine = AnswerEngine::new(index.clone(), Arc::new(FixedGenerator::new("ok")));

        engine.answer("question?", 0).await.unwrap();
        assert_eq!(
            *index.last_limit.lock().unwrap(),
            Some(DEFAULT_CONTEXT_SEGMENTS)
        );
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let engine = AnswerEngine::new(
            Arc::new(FixedIndex::new(vec![hit("ep1", "T", 1, "text")])),
            Arc::new(FailingGenerator),
        );

        let err = engine.answer("question?", 3).await.unwrap_err();
        assert!(matches!(err, PodbotnikError::Generation(_)));
    }

    #[tokio::test]
    async fn test_list_episodes_empty_corpus() {
        let engine = AnswerEngine::new(
            Arc::new(MemoryIndex::new()),
            Arc::new(FixedGenerator::new("unused")),
        );
        assert!(engine.list_episodes().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_and_list_order() {
        let engine = AnswerEngine::new(
            Arc::new(MemoryIndex::new()),
            Arc::new(FixedGenerator::new("unused")),
        );
        engine.add_episode(record("c", "Third", 3, "t")).await.unwrap();
        engine.add_episode(record("a", "First", 1, "t")).await.unwrap();
        engine.add_episode(record("b", "Second", 2, "t")).await.unwrap();

        let numbers: Vec<u32> = engine.list_episodes().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_latest_metadata_and_text() {
        let engine = AnswerEngine::new(
            Arc::new(MemoryIndex::new()),
            Arc::new(FixedGenerator::new("grounded answer")),
        );
        engine
            .add_episode(record("ep1", "Old Title", 1, "topic is penguins"))
            .await
            .unwrap();
        engine
            .add_episode(record("ep1", "New Title", 2, "topic is walruses"))
            .await
            .unwrap();

        let episodes = engine.list_episodes();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "New Title");
        assert_eq!(episodes[0].number, 2);

        // Stale transcript text is no longer retrievable.
        let result = engine.answer("penguins", 3).await.unwrap();
        assert_eq!(result.context_used, 0);
        let result = engine.answer("walruses", 3).await.unwrap();
        assert_eq!(result.context_used, 1);
        assert_eq!(result.sources[0].episode_title, "New Title");
    }

    #[tokio::test]
    async fn test_segment_ingestion_carries_timestamps() {
        let engine = AnswerEngine::new(
            Arc::new(MemoryIndex::new()),
            Arc::new(FixedGenerator::new("grounded answer")),
        );
        let mut rec = record("ep1", "Segments", 1, "");
        rec.video_url = "https://youtube.com/watch?v=X".to_string();
        engine
            .add_episode_segments(
                rec,
                vec![
                    TranscriptSegment {
                        start_time: "00:30".to_string(),
                        end_time: "01:00".to_string(),
                        text: "we talk about oceans".to_string(),
                    },
                    TranscriptSegment {
                        start_time: "01:00".to_string(),
                        end_time: "02:00".to_string(),
                        text: "then about deserts".to_string(),
                    },
                ],
            )
            .await
            .unwrap();

        let result = engine.answer("oceans", 3).await.unwrap();
        assert_eq!(result.context_used, 1);
        assert_eq!(result.sources[0].timestamp, "00:30");
        assert_eq!(
            result.sources[0].video_link.as_deref(),
            Some("https://youtube.com/watch?v=X&t=30")
        );
    }
}
