use chrono::{NaiveDateTime, Utc};
use courtside_core::{
    BalanceStrategy, CourtPosition, DomainError, Game, GameSession, OraclePartition, Player,
    PlayerCollection, PlayerMove, Proposition, PropositionEditor, ScoreInput, ScoreRecorder,
    SelectionGate, SkillTier, Team, TeamSizer, validate_partition,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequences {
    pub player: u32,
    pub session: u32,
    pub proposition: u32,
    pub team: u32,
    pub game: u32,
}

impl Default for Sequences {
    fn default() -> Self {
        Sequences {
            player: 1,
            session: 1,
            proposition: 1,
            team: 1,
            game: 1,
        }
    }
}

impl Sequences {
    fn next_player(&mut self) -> u32 {
        let id = self.player;
        self.player += 1;
        id
    }

    fn next_session(&mut self) -> u32 {
        let id = self.session;
        self.session += 1;
        id
    }

    fn next_proposition(&mut self) -> u32 {
        let id = self.proposition;
        self.proposition += 1;
        id
    }

    fn next_team(&mut self) -> u32 {
        let id = self.team;
        self.team += 1;
        id
    }

    fn next_game(&mut self) -> u32 {
        let id = self.game;
        self.game += 1;
        id
    }
}

/// The whole persistent state of the service. Every public method is one
/// transaction: callers take the single write guard, invoke a method, and
/// the state either fully commits or stays untouched. Lifecycle rules are
/// not re-derived here; each mutation defers to the gate and the
/// validators in `core`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storage {
    pub players: PlayerCollection,
    pub sessions: Vec<GameSession>,
    pub propositions: Vec<Proposition>,
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    pub sequences: Sequences,
}

impl Storage {
    pub fn new() -> Self {
        Storage {
            players: PlayerCollection::new(Vec::new()),
            sessions: Vec::new(),
            propositions: Vec::new(),
            teams: Vec::new(),
            games: Vec::new(),
            sequences: Sequences::default(),
        }
    }

    // players

    pub fn add_player(
        &mut self,
        name: String,
        tier: SkillTier,
        positions: Vec<CourtPosition>,
    ) -> Result<Player, DomainError> {
        let id = self.sequences.next_player();
        let player = Player::new(id, name, tier, positions, Utc::now().naive_utc())?;

        self.players.add(player.clone());
        debug!("player {} added: {}", player.id, player.name);

        Ok(player)
    }

    pub fn update_player(
        &mut self,
        player_id: u32,
        name: String,
        tier: SkillTier,
        positions: Vec<CourtPosition>,
    ) -> Result<Player, DomainError> {
        let created_at = self
            .players
            .get(player_id)
            .ok_or(DomainError::PlayerNotFound { player_id })?
            .created_at;

        if self.is_player_committed(player_id) {
            return Err(DomainError::PlayerCommitted { player_id });
        }

        let updated = Player::new(player_id, name, tier, positions, created_at)?;

        if let Some(player) = self.players.players.iter_mut().find(|p| p.id == player_id) {
            *player = updated.clone();
        }

        Ok(updated)
    }

    /// Deleting a player also pulls them out of every candidate team they
    /// sit on; those teams may drop below the band, which the next
    /// selection attempt will catch. Committed players cannot be deleted.
    pub fn remove_player(&mut self, player_id: u32) -> Result<(), DomainError> {
        if !self.players.contains(player_id) {
            return Err(DomainError::PlayerNotFound { player_id });
        }

        if self.is_player_committed(player_id) {
            return Err(DomainError::PlayerCommitted { player_id });
        }

        self.players.remove(player_id);

        for team in self.teams.iter_mut() {
            team.members.retain(|id| *id != player_id);
        }

        debug!("player {} removed", player_id);

        Ok(())
    }

    /// A player is committed once they sit on a team of any selected
    /// proposition. Candidate membership alone does not commit anyone.
    pub fn is_player_committed(&self, player_id: u32) -> bool {
        self.sessions
            .iter()
            .filter_map(|session| session.selected_proposition_id)
            .any(|proposition_id| {
                self.teams
                    .iter()
                    .any(|team| team.proposition_id == proposition_id && team.has_member(player_id))
            })
    }

    // sessions

    pub fn add_session(
        &mut self,
        scheduled_at: NaiveDateTime,
        description: Option<String>,
    ) -> GameSession {
        let id = self.sequences.next_session();
        let session = GameSession::new(id, scheduled_at, description, Utc::now().naive_utc());

        self.sessions.push(session.clone());
        info!("session {} scheduled for {}", id, scheduled_at);

        session
    }

    pub fn remove_session(&mut self, session_id: u32) -> Result<(), DomainError> {
        if !self.sessions.iter().any(|s| s.id == session_id) {
            return Err(DomainError::SessionNotFound { session_id });
        }

        let games = self
            .games
            .iter()
            .filter(|game| game.session_id == session_id)
            .count();

        if games > 0 {
            return Err(DomainError::SessionHasGames { session_id, games });
        }

        let stale: Vec<u32> = self
            .propositions
            .iter()
            .filter(|p| p.session_id == session_id)
            .map(|p| p.id)
            .collect();

        self.teams.retain(|team| !stale.contains(&team.proposition_id));
        self.propositions.retain(|p| p.session_id != session_id);
        self.sessions.retain(|s| s.id != session_id);

        info!("session {} removed", session_id);

        Ok(())
    }

    /// Creates a session together with its first candidate set. A session
    /// without propositions is useless, so if the partitions fail
    /// commit-time validation the half-created session is rolled back and
    /// the whole call reports the error.
    pub fn commit_new_session(
        &mut self,
        scheduled_at: NaiveDateTime,
        description: Option<String>,
        roster_ids: &[u32],
        partitions: &[(BalanceStrategy, OraclePartition)],
    ) -> Result<GameSession, DomainError> {
        let session = self.add_session(scheduled_at, description);

        match self.replace_propositions(session.id, roster_ids, partitions) {
            Ok(_) => Ok(session),
            Err(err) => {
                self.sessions.retain(|s| s.id != session.id);
                Err(err)
            }
        }
    }

    // propositions

    /// Installs a freshly validated candidate set for the session,
    /// discarding any previous candidates. The partitions were produced
    /// outside the write guard (the oracle is slow), so everything they
    /// assume is re-checked here: the session must still be undecided and
    /// every roster player must still exist.
    pub fn replace_propositions(
        &mut self,
        session_id: u32,
        roster_ids: &[u32],
        partitions: &[(BalanceStrategy, OraclePartition)],
    ) -> Result<Vec<Proposition>, DomainError> {
        let session = self
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or(DomainError::SessionNotFound { session_id })?;

        SelectionGate::ensure_buildable(session)?;

        for &player_id in roster_ids {
            if !self.players.contains(player_id) {
                return Err(DomainError::PlayerNotFound { player_id });
            }
        }

        let banding = TeamSizer::size(roster_ids.len())?;

        for (strategy, partition) in partitions {
            validate_partition(*strategy, roster_ids, &banding, partition)?;
        }

        let stale: Vec<u32> = self
            .propositions
            .iter()
            .filter(|p| p.session_id == session_id)
            .map(|p| p.id)
            .collect();

        self.teams.retain(|team| !stale.contains(&team.proposition_id));
        self.propositions.retain(|p| p.session_id != session_id);

        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(partitions.len());

        for (strategy, partition) in partitions {
            let proposition_id = self.sequences.next_proposition();
            let mut team_ids = Vec::with_capacity(partition.teams.len());

            for members in &partition.teams {
                let team_id = self.sequences.next_team();
                self.teams
                    .push(Team::new(team_id, proposition_id, members.clone()));
                team_ids.push(team_id);
            }

            let proposition = Proposition::new(proposition_id, session_id, *strategy, team_ids, now);
            self.propositions.push(proposition.clone());
            created.push(proposition);
        }

        info!(
            "session {}: rebuilt {} propositions over {} players",
            session_id,
            created.len(),
            roster_ids.len()
        );

        Ok(created)
    }

    // editing

    pub fn apply_moves(
        &mut self,
        proposition_id: u32,
        moves: &[PlayerMove],
    ) -> Result<Vec<Team>, DomainError> {
        let proposition = self
            .propositions
            .iter()
            .find(|p| p.id == proposition_id)
            .ok_or(DomainError::PropositionNotFound { proposition_id })?
            .clone();

        let session = self
            .sessions
            .iter()
            .find(|s| s.id == proposition.session_id)
            .ok_or(DomainError::SessionNotFound {
                session_id: proposition.session_id,
            })?;

        SelectionGate::ensure_editable(session, &proposition)?;

        let mut updated: Vec<Team> = self
            .teams
            .iter()
            .filter(|team| team.proposition_id == proposition_id)
            .cloned()
            .collect();

        PropositionEditor::apply(&mut updated, moves)?;

        for team in &updated {
            if let Some(slot) = self.teams.iter_mut().find(|t| t.id == team.id) {
                *slot = team.clone();
            }
        }

        debug!(
            "proposition {}: {} moves applied",
            proposition_id,
            moves.len()
        );

        Ok(updated)
    }

    // selection

    /// The exactly-once transition. The gate re-reads the session state
    /// under the same guard that performs the write, so two racing
    /// selections cannot both pass the `None` check.
    pub fn select_proposition(
        &mut self,
        session_id: u32,
        proposition_id: u32,
    ) -> Result<GameSession, DomainError> {
        let proposition = self
            .propositions
            .iter()
            .find(|p| p.id == proposition_id)
            .ok_or(DomainError::PropositionNotFound { proposition_id })?
            .clone();

        let teams: Vec<Team> = self
            .teams
            .iter()
            .filter(|team| team.proposition_id == proposition_id)
            .cloned()
            .collect();

        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or(DomainError::SessionNotFound { session_id })?;

        SelectionGate::authorize(session, &proposition, &teams)?;

        session.selected_proposition_id = Some(proposition_id);

        info!(
            "session {}: proposition {} ({}) selected",
            session_id, proposition_id, proposition.strategy
        );

        Ok(session.clone())
    }

    // scoring

    pub fn record_game(
        &mut self,
        session_id: u32,
        scores: &[ScoreInput],
    ) -> Result<Game, DomainError> {
        let session = self
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or(DomainError::SessionNotFound { session_id })?;

        let selection = self.selection_teams(session);
        let entries = ScoreRecorder::record(session, &selection, scores)?;

        let id = self.sequences.next_game();
        let game = Game::new(id, session_id, entries, Utc::now().naive_utc());

        self.games.push(game.clone());
        info!("session {}: game {} recorded", session_id, id);

        Ok(game)
    }

    pub fn update_game(
        &mut self,
        game_id: u32,
        scores: &[ScoreInput],
    ) -> Result<Game, DomainError> {
        let game = self
            .games
            .iter()
            .find(|g| g.id == game_id)
            .ok_or(DomainError::GameNotFound { game_id })?;

        let session = self
            .sessions
            .iter()
            .find(|s| s.id == game.session_id)
            .ok_or(DomainError::SessionNotFound {
                session_id: game.session_id,
            })?;

        let selection = self.selection_teams(session);
        let entries = ScoreRecorder::correct(game, &selection, scores)?;

        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or(DomainError::GameNotFound { game_id })?;

        game.entries = entries;
        info!("game {}: scores corrected", game_id);

        Ok(game.clone())
    }

    // lookups

    pub fn player(&self, player_id: u32) -> Result<&Player, DomainError> {
        self.players
            .get(player_id)
            .ok_or(DomainError::PlayerNotFound { player_id })
    }

    pub fn session(&self, session_id: u32) -> Result<&GameSession, DomainError> {
        self.sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or(DomainError::SessionNotFound { session_id })
    }

    pub fn proposition(&self, proposition_id: u32) -> Result<&Proposition, DomainError> {
        self.propositions
            .iter()
            .find(|p| p.id == proposition_id)
            .ok_or(DomainError::PropositionNotFound { proposition_id })
    }

    pub fn game(&self, game_id: u32) -> Result<&Game, DomainError> {
        self.games
            .iter()
            .find(|g| g.id == game_id)
            .ok_or(DomainError::GameNotFound { game_id })
    }

    pub fn propositions_for_session(&self, session_id: u32) -> Vec<&Proposition> {
        self.propositions
            .iter()
            .filter(|p| p.session_id == session_id)
            .collect()
    }

    pub fn teams_for_proposition(&self, proposition_id: u32) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|team| team.proposition_id == proposition_id)
            .collect()
    }

    pub fn games_for_session(&self, session_id: u32) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| game.session_id == session_id)
            .collect()
    }

    fn selection_teams(&self, session: &GameSession) -> Vec<Team> {
        match session.selected_proposition_id {
            Some(proposition_id) => self
                .teams
                .iter()
                .filter(|team| team.proposition_id == proposition_id)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Referential sweep run after restoring a snapshot. Issues are
    /// reported, not fixed: a hand-edited or truncated data file should be
    /// visible in the log, not silently papered over.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for team in &self.teams {
            if !self
                .propositions
                .iter()
                .any(|p| p.id == team.proposition_id)
            {
                issues.push(format!(
                    "team {} references missing proposition {}",
                    team.id, team.proposition_id
                ));
            }

            for &player_id in &team.members {
                if !self.players.contains(player_id) {
                    issues.push(format!(
                        "team {} references missing player {}",
                        team.id, player_id
                    ));
                }
            }
        }

        for proposition in &self.propositions {
            if !self.sessions.iter().any(|s| s.id == proposition.session_id) {
                issues.push(format!(
                    "proposition {} references missing session {}",
                    proposition.id, proposition.session_id
                ));
            }
        }

        for session in &self.sessions {
            if let Some(proposition_id) = session.selected_proposition_id {
                let selected = self.propositions.iter().find(|p| p.id == proposition_id);

                match selected {
                    Some(p) if p.session_id == session.id => {}
                    Some(_) => issues.push(format!(
                        "session {} selected foreign proposition {}",
                        session.id, proposition_id
                    )),
                    None => issues.push(format!(
                        "session {} selected missing proposition {}",
                        session.id, proposition_id
                    )),
                }
            }
        }

        for game in &self.games {
            let session = self.sessions.iter().find(|s| s.id == game.session_id);

            match session {
                None => issues.push(format!(
                    "game {} references missing session {}",
                    game.id, game.session_id
                )),
                Some(session) => {
                    let selection = self.selection_teams(session);

                    for entry in &game.entries {
                        if !selection.iter().any(|team| team.id == entry.team_id) {
                            issues.push(format!(
                                "game {} scores team {} outside the session's selection",
                                game.id, entry.team_id
                            ));
                        }
                    }
                }
            }
        }

        issues
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::HeuristicBalancer;

    fn roster_positions(idx: u32) -> Vec<CourtPosition> {
        vec![CourtPosition::ALL[(idx as usize) % CourtPosition::ALL.len()]]
    }

    fn storage_with_players(count: u32) -> Storage {
        let mut storage = Storage::new();

        for idx in 1..=count {
            storage
                .add_player(
                    format!("Player {}", idx),
                    SkillTier::ALL[(idx as usize) % SkillTier::ALL.len()],
                    roster_positions(idx),
                )
                .unwrap();
        }

        storage
    }

    fn heuristic_partitions(
        storage: &Storage,
        roster_ids: &[u32],
    ) -> Vec<(BalanceStrategy, OraclePartition)> {
        let players: Vec<Player> = roster_ids
            .iter()
            .map(|id| storage.players.get(*id).unwrap().clone())
            .collect();
        let banding = TeamSizer::size(players.len()).unwrap();

        BalanceStrategy::ALL
            .iter()
            .map(|&strategy| {
                (
                    strategy,
                    HeuristicBalancer::partition(&players, &banding, strategy),
                )
            })
            .collect()
    }

    fn build_session(storage: &mut Storage, roster_ids: &[u32]) -> u32 {
        let session = storage.add_session(Utc::now().naive_utc(), None);
        let partitions = heuristic_partitions(storage, roster_ids);

        storage
            .replace_propositions(session.id, roster_ids, &partitions)
            .unwrap();

        session.id
    }

    #[test]
    fn ten_player_session_runs_the_whole_lifecycle() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let propositions: Vec<u32> = storage
            .propositions_for_session(session_id)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(propositions.len(), 3);

        for &proposition_id in &propositions {
            let teams = storage.teams_for_proposition(proposition_id);
            assert_eq!(teams.len(), 2);
            assert!(teams.iter().all(|team| team.size() == 5));
        }

        // pick the second candidate, record a game against its teams
        let selected = propositions[1];
        storage.select_proposition(session_id, selected).unwrap();

        let team_ids: Vec<u32> = storage
            .teams_for_proposition(selected)
            .iter()
            .map(|t| t.id)
            .collect();

        let game = storage
            .record_game(
                session_id,
                &[
                    ScoreInput {
                        team_id: team_ids[0],
                        points: 32,
                    },
                    ScoreInput {
                        team_id: team_ids[1],
                        points: 28,
                    },
                ],
            )
            .unwrap();

        assert_eq!(game.entries.len(), 2);

        // every sibling froze with the selection
        let sibling = propositions[0];
        let sibling_team = storage.teams_for_proposition(sibling)[0].id;
        let member = storage
            .teams_for_proposition(sibling)
            .first()
            .and_then(|t| t.members.first().copied())
            .unwrap();

        let result = storage.apply_moves(
            sibling,
            &[PlayerMove {
                player_id: member,
                from_team: sibling_team,
                to_team: sibling_team,
            }],
        );

        assert_eq!(
            result,
            Err(DomainError::PropositionLocked {
                proposition_id: sibling
            })
        );

        let issues = storage.verify_integrity();
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn second_selection_is_rejected() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let propositions: Vec<u32> = storage
            .propositions_for_session(session_id)
            .iter()
            .map(|p| p.id)
            .collect();

        storage
            .select_proposition(session_id, propositions[0])
            .unwrap();

        assert_eq!(
            storage.select_proposition(session_id, propositions[1]),
            Err(DomainError::AlreadySelected { session_id })
        );
    }

    #[test]
    fn rebuild_is_rejected_after_selection() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let selected = storage.propositions_for_session(session_id)[0].id;
        storage.select_proposition(session_id, selected).unwrap();

        let partitions = heuristic_partitions(&storage, &roster);
        assert_eq!(
            storage.replace_propositions(session_id, &roster, &partitions),
            Err(DomainError::AlreadySelected { session_id })
        );
    }

    #[test]
    fn rebuild_catches_a_player_deleted_mid_flight() {
        let mut storage = storage_with_players(11);
        let roster: Vec<u32> = (1..=11).collect();
        let session = storage.add_session(Utc::now().naive_utc(), None);

        // partitions computed before the roster changed under us
        let partitions = heuristic_partitions(&storage, &roster);
        storage.remove_player(11).unwrap();

        assert_eq!(
            storage.replace_propositions(session.id, &roster, &partitions),
            Err(DomainError::PlayerNotFound { player_id: 11 })
        );
    }

    #[test]
    fn scoring_a_sibling_team_is_rejected() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let propositions: Vec<u32> = storage
            .propositions_for_session(session_id)
            .iter()
            .map(|p| p.id)
            .collect();

        storage
            .select_proposition(session_id, propositions[0])
            .unwrap();

        let selected_team = storage.teams_for_proposition(propositions[0])[0].id;
        let sibling_team = storage.teams_for_proposition(propositions[1])[0].id;

        let result = storage.record_game(
            session_id,
            &[
                ScoreInput {
                    team_id: selected_team,
                    points: 21,
                },
                ScoreInput {
                    team_id: sibling_team,
                    points: 18,
                },
            ],
        );

        assert_eq!(
            result,
            Err(DomainError::TeamNotInSelection {
                team_id: sibling_team
            })
        );
    }

    #[test]
    fn edits_move_players_and_selection_rechecks_the_band() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let proposition_id = storage.propositions_for_session(session_id)[0].id;
        let teams: Vec<Team> = storage
            .teams_for_proposition(proposition_id)
            .into_iter()
            .cloned()
            .collect();

        let mover = teams[0].members[0];
        storage
            .apply_moves(
                proposition_id,
                &[PlayerMove {
                    player_id: mover,
                    from_team: teams[0].id,
                    to_team: teams[1].id,
                }],
            )
            .unwrap();

        // 4 vs 6 is storable but not selectable
        assert!(matches!(
            storage.select_proposition(session_id, proposition_id),
            Err(DomainError::InvalidComposition { size: 4, .. })
        ));

        // move someone back and selection goes through
        let other = storage
            .teams_for_proposition(proposition_id)
            .iter()
            .find(|t| t.id == teams[1].id)
            .map(|t| t.members[0])
            .unwrap();

        storage
            .apply_moves(
                proposition_id,
                &[PlayerMove {
                    player_id: other,
                    from_team: teams[1].id,
                    to_team: teams[0].id,
                }],
            )
            .unwrap();

        storage
            .select_proposition(session_id, proposition_id)
            .unwrap();
    }

    #[test]
    fn committed_players_cannot_be_edited_or_deleted() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let proposition_id = storage.propositions_for_session(session_id)[0].id;
        storage
            .select_proposition(session_id, proposition_id)
            .unwrap();

        assert_eq!(
            storage.remove_player(3),
            Err(DomainError::PlayerCommitted { player_id: 3 })
        );
        assert_eq!(
            storage.update_player(
                3,
                "Renamed".to_string(),
                SkillTier::S,
                vec![CourtPosition::Center]
            ),
            Err(DomainError::PlayerCommitted { player_id: 3 })
        );
    }

    #[test]
    fn deleting_an_uncommitted_player_scrubs_candidate_teams() {
        let mut storage = storage_with_players(11);
        let roster: Vec<u32> = (1..=11).collect();
        build_session(&mut storage, &roster);

        storage.remove_player(5).unwrap();

        assert!(
            storage
                .teams
                .iter()
                .all(|team| !team.has_member(5))
        );
    }

    #[test]
    fn sessions_with_games_cannot_be_deleted() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let proposition_id = storage.propositions_for_session(session_id)[0].id;
        storage
            .select_proposition(session_id, proposition_id)
            .unwrap();

        let team_ids: Vec<u32> = storage
            .teams_for_proposition(proposition_id)
            .iter()
            .map(|t| t.id)
            .collect();

        storage
            .record_game(
                session_id,
                &[
                    ScoreInput {
                        team_id: team_ids[0],
                        points: 15,
                    },
                    ScoreInput {
                        team_id: team_ids[1],
                        points: 12,
                    },
                ],
            )
            .unwrap();

        assert_eq!(
            storage.remove_session(session_id),
            Err(DomainError::SessionHasGames {
                session_id,
                games: 1
            })
        );
    }

    #[test]
    fn score_corrections_keep_the_team_set() {
        let mut storage = storage_with_players(10);
        let roster: Vec<u32> = (1..=10).collect();
        let session_id = build_session(&mut storage, &roster);

        let proposition_id = storage.propositions_for_session(session_id)[0].id;
        storage
            .select_proposition(session_id, proposition_id)
            .unwrap();

        let team_ids: Vec<u32> = storage
            .teams_for_proposition(proposition_id)
            .iter()
            .map(|t| t.id)
            .collect();

        let game = storage
            .record_game(
                session_id,
                &[
                    ScoreInput {
                        team_id: team_ids[0],
                        points: 32,
                    },
                    ScoreInput {
                        team_id: team_ids[1],
                        points: 28,
                    },
                ],
            )
            .unwrap();

        let corrected = storage
            .update_game(
                game.id,
                &[
                    ScoreInput {
                        team_id: team_ids[0],
                        points: 30,
                    },
                    ScoreInput {
                        team_id: team_ids[1],
                        points: 28,
                    },
                ],
            )
            .unwrap();

        assert_eq!(corrected.entries[0].points, 30);

        let rebuilt = heuristic_partitions(&storage, &roster);
        assert_eq!(
            storage.replace_propositions(session_id, &roster, &rebuilt),
            Err(DomainError::AlreadySelected { session_id })
        );
    }
}
