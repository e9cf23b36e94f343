use courtside_core::{BalanceStrategy, DomainError, OraclePartition, OracleRequest};
use log::debug;
use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::generation::parameters::FormatType;
use std::time::Duration;

/// Balancing oracle backed by a local Ollama model. The model sees the
/// roster and the banding and answers with team assignments; nothing it
/// says is trusted until it passes partition validation upstream.
pub struct OllamaOracle {
    client: Ollama,
    model: String,
    timeout: Duration,
}

impl OllamaOracle {
    pub fn new(host: String, port: u16, model: String, timeout: Duration) -> Self {
        OllamaOracle {
            client: Ollama::new(host, port),
            model,
            timeout,
        }
    }

    pub async fn propose(&self, request: &OracleRequest) -> Result<OraclePartition, DomainError> {
        let prompt = Self::prompt(request);
        let generation =
            GenerationRequest::new(self.model.clone(), prompt).format(FormatType::Json);

        let response = match tokio::time::timeout(self.timeout, self.client.generate(generation))
            .await
        {
            Err(_) => {
                return Err(DomainError::OracleTimeout {
                    strategy: request.strategy,
                });
            }
            Ok(Err(e)) => {
                return Err(DomainError::OracleUnavailable {
                    reason: e.to_string(),
                });
            }
            Ok(Ok(response)) => response,
        };

        debug!(
            "oracle answered {} chars for {}",
            response.response.len(),
            request.strategy
        );

        Self::parse(request.strategy, &response.response)
    }

    fn prompt(request: &OracleRequest) -> String {
        let directive = match request.strategy {
            BalanceStrategy::SkillBalanced => {
                "make the summed skill of every team as equal as possible"
            }
            BalanceStrategy::PositionFocused => {
                "give every team a workable mix of positions (PG/SG/SF/PF/C)"
            }
            BalanceStrategy::General => {
                "any even split is acceptable; prefer groupings that mix people up"
            }
        };

        let players = serde_json::to_string(&request.players).unwrap_or_default();

        format!(
            "You assign pickup basketball players to teams.\n\
             Split the roster below into exactly {} teams. Every team must have \
             between {} and {} players, and every player id must appear in exactly \
             one team.\n\
             Objective: {}.\n\
             Answer with JSON only, shaped as {{\"teams\": [[player ids], ...]}} \
             with {} inner arrays.\n\
             Roster (skill is 1-5, higher is better): {}",
            request.team_count,
            request.min_size,
            request.max_size,
            directive,
            request.team_count,
            players
        )
    }

    fn parse(strategy: BalanceStrategy, answer: &str) -> Result<OraclePartition, DomainError> {
        serde_json::from_str(answer).map_err(|e| DomainError::InvalidOracleResult {
            strategy,
            reason: format!("unparseable answer: {}", e),
        })
    }
}
