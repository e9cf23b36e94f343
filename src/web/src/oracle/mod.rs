pub mod ollama;

pub use ollama::OllamaOracle;

use courtside_core::{
    BalanceStrategy, DomainError, HeuristicBalancer, OraclePartition, OracleRequest, Player,
    TeamBanding, validate_partition,
};
use log::warn;

/// Where lineup partitions come from. The Ollama variant asks a local model
/// and treats whatever comes back as hostile input; the heuristic variant
/// answers from the in-process balancer and never fails.
pub enum OracleClient {
    Ollama(OllamaOracle),
    Heuristic,
    #[cfg(test)]
    Scripted(std::sync::Mutex<std::collections::VecDeque<Result<OraclePartition, DomainError>>>),
}

impl OracleClient {
    pub async fn propose(
        &self,
        strategy: BalanceStrategy,
        players: &[Player],
        banding: &TeamBanding,
    ) -> Result<OraclePartition, DomainError> {
        match self {
            OracleClient::Ollama(oracle) => {
                oracle
                    .propose(&OracleRequest::new(strategy, banding, players))
                    .await
            }
            OracleClient::Heuristic => Ok(HeuristicBalancer::partition(players, banding, strategy)),
            #[cfg(test)]
            OracleClient::Scripted(answers) => answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(DomainError::OracleUnavailable {
                    reason: "script exhausted".to_string(),
                })),
        }
    }
}

/// Produces the full candidate set: one validated partition per strategy.
/// All oracle I/O happens here, before the caller takes the write guard,
/// so a slow model never blocks unrelated requests.
pub async fn balanced_partitions(
    oracle: &OracleClient,
    players: &[Player],
    banding: &TeamBanding,
) -> Result<Vec<(BalanceStrategy, OraclePartition)>, DomainError> {
    let roster_ids: Vec<u32> = players.iter().map(|p| p.id).collect();
    let mut partitions = Vec::with_capacity(BalanceStrategy::ALL.len());

    for strategy in BalanceStrategy::ALL {
        let partition = propose_checked(oracle, strategy, players, banding, &roster_ids).await?;
        partitions.push((strategy, partition));
    }

    Ok(partitions)
}

/// One oracle call, validated, with a single fresh retry when the answer is
/// unusable. Transport failures are not retried here; the admin can rerun
/// the whole build.
async fn propose_checked(
    oracle: &OracleClient,
    strategy: BalanceStrategy,
    players: &[Player],
    banding: &TeamBanding,
    roster_ids: &[u32],
) -> Result<OraclePartition, DomainError> {
    let first = oracle
        .propose(strategy, players, banding)
        .await
        .and_then(|partition| {
            validate_partition(strategy, roster_ids, banding, &partition)?;
            Ok(partition)
        });

    match first {
        Ok(partition) => Ok(partition),
        Err(DomainError::InvalidOracleResult { strategy, reason }) => {
            warn!(
                "oracle produced an invalid {} partition ({}), retrying once",
                strategy, reason
            );

            let partition = oracle.propose(strategy, players, banding).await?;
            validate_partition(strategy, roster_ids, banding, &partition)?;

            Ok(partition)
        }
        Err(other) => Err(other),
    }
}
