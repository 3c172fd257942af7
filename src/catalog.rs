use std::sync::OnceLock;

/// The games the matcher knows about. `Pubg` has no distinct
/// positions (the wizard skips that step) and its profiles carry no KDA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Lol,
    Valorant,
    Pubg,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Lol, Game::Valorant, Game::Pubg];

    pub fn id(self) -> &'static str {
        match self {
            Game::Lol => "lol",
            Game::Valorant => "valorant",
            Game::Pubg => "pubg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Game::Lol => "리그 오브 레전드",
            Game::Valorant => "발로란트",
            Game::Pubg => "배틀그라운드",
        }
    }

    pub fn from_id(id: &str) -> Option<Game> {
        Game::ALL.iter().copied().find(|game| game.id() == id)
    }

    /// Whether the wizard shows the position-selection step for this game.
    pub fn has_positions(self) -> bool {
        !self.positions().is_empty()
    }

    pub fn uses_kda(self) -> bool {
        !matches!(self, Game::Pubg)
    }

    /// What the role tag is called in this game's UI copy.
    pub fn role_noun(self) -> &'static str {
        match self {
            Game::Lol => "포지션",
            Game::Valorant => "역할군",
            Game::Pubg => "포지션",
        }
    }

    pub fn positions(self) -> &'static [PositionInfo] {
        match self {
            Game::Lol => &[
                PositionInfo { id: "top", label: "탑" },
                PositionInfo { id: "jungle", label: "정글" },
                PositionInfo { id: "mid", label: "미드" },
                PositionInfo { id: "adc", label: "원딜" },
                PositionInfo { id: "support", label: "서폿" },
            ],
            Game::Valorant => &[
                PositionInfo { id: "duelist", label: "타격대" },
                PositionInfo { id: "initiator", label: "척후대" },
                PositionInfo { id: "controller", label: "전략가" },
                PositionInfo { id: "sentinel", label: "감시자" },
            ],
            Game::Pubg => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionInfo {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sentinel position id meaning "no position filtering".
pub const ALL_POSITIONS: &str = "all";

/// A tier family; selectable tier ids are `{name}{abbr}{division}` with
/// division in 1..=4, e.g. `goldG2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierFamily {
    pub name: &'static str,
    pub label: &'static str,
    pub abbr: &'static str,
}

pub const TIER_FAMILIES: [TierFamily; 7] = [
    TierFamily { name: "iron", label: "아이언", abbr: "I" },
    TierFamily { name: "bronze", label: "브론즈", abbr: "B" },
    TierFamily { name: "silver", label: "실버", abbr: "S" },
    TierFamily { name: "gold", label: "골드", abbr: "G" },
    TierFamily { name: "platinum", label: "플래티넘", abbr: "P" },
    TierFamily { name: "diamond", label: "다이아", abbr: "D" },
    TierFamily { name: "master", label: "마스터", abbr: "M" },
];

pub fn tier_id(family: &TierFamily, division: u8) -> String {
    format!("{}{}{}", family.name, family.abbr, division)
}

/// Resolve the tier family encoded in a tier id like `goldG2`.
pub fn tier_family(tier_id: &str) -> Option<&'static TierFamily> {
    TIER_FAMILIES
        .iter()
        .find(|family| tier_id.starts_with(family.name))
}

/// Human-readable form of a tier id (`goldG2` -> `골드 2`).
pub fn tier_label(id: &str) -> String {
    match tier_family(id) {
        Some(family) => {
            let division = id
                .strip_prefix(family.name)
                .and_then(|rest| rest.strip_prefix(family.abbr))
                .unwrap_or("");
            if division.is_empty() {
                family.label.to_string()
            } else {
                format!("{} {}", family.label, division)
            }
        }
        None => id.to_string(),
    }
}

pub const GAME_STYLE_TAGS: [&str; 6] = [
    "공격적인",
    "수비적인",
    "빡겜러",
    "즐겜러",
    "오더형",
    "팔로워형",
];

pub const COMM_STYLE_TAGS: [&str; 4] = [
    "대화 많은",
    "조용한",
    "텐션 높은",
    "차분한",
];

/// A prospective duo-match profile. Read-only; the role tag is resolved
/// once here at catalog construction, never inferred at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProfile {
    pub id: u32,
    pub name: String,
    pub tag: String,
    pub game: Game,
    pub role: String,
    pub tier: String,
    pub win_rate: f64,
    pub kda: Option<f64>,
    pub bio: String,
    pub game_styles: Vec<String>,
    pub comm_styles: Vec<String>,
}

struct CandidateSeed {
    id: u32,
    name: &'static str,
    tag: &'static str,
    game: Game,
    role: &'static str,
    tier: &'static str,
    win_rate: f64,
    kda: f64,
    bio: &'static str,
    game_styles: &'static [&'static str],
    comm_styles: &'static [&'static str],
}

const SEEDS: &[CandidateSeed] = &[
    CandidateSeed {
        id: 101,
        name: "한강다리수비수",
        tag: "한강다리수비수#KR1",
        game: Game::Lol,
        role: "top",
        tier: "골드 1",
        win_rate: 0.57,
        kda: 2.8,
        bio: "탑 외길 5년차. 스플릿 푸시 좋아합니다.",
        game_styles: &["공격적인", "빡겜러"],
        comm_styles: &["조용한"],
    },
    CandidateSeed {
        id: 102,
        name: "초식정글러",
        tag: "초식정글러#KR1",
        game: Game::Lol,
        role: "jungle",
        tier: "골드 3",
        win_rate: 0.52,
        kda: 3.1,
        bio: "동선 설계가 취미입니다. 오브젝트 위주로 굴러요.",
        game_styles: &["오더형", "빡겜러"],
        comm_styles: &["대화 많은"],
    },
    CandidateSeed {
        id: 103,
        name: "미드왕김미드",
        tag: "미드왕김미드#KR2",
        game: Game::Lol,
        role: "mid",
        tier: "플래티넘 4",
        win_rate: 0.55,
        kda: 3.4,
        bio: "로밍형 미드. 콜 잘 받는 정글 찾아요.",
        game_styles: &["공격적인", "오더형"],
        comm_styles: &["텐션 높은"],
    },
    CandidateSeed {
        id: 104,
        name: "한타때만나요",
        tag: "한타때만나요#KR1",
        game: Game::Lol,
        role: "adc",
        tier: "골드 2",
        win_rate: 0.49,
        kda: 2.5,
        bio: "라인전은 반반, 한타에서 캐리합니다.",
        game_styles: &["수비적인", "즐겜러"],
        comm_styles: &["차분한"],
    },
    CandidateSeed {
        id: 105,
        name: "와드는제가",
        tag: "와드는제가#KR3",
        game: Game::Lol,
        role: "support",
        tier: "실버 1",
        win_rate: 0.54,
        kda: 3.9,
        bio: "시야 장악 담당. 원딜 멱살 잡고 갑니다.",
        game_styles: &["팔로워형", "즐겜러"],
        comm_styles: &["대화 많은", "차분한"],
    },
    CandidateSeed {
        id: 106,
        name: "탑신병자",
        tag: "탑신병자#KR1",
        game: Game::Lol,
        role: "top",
        tier: "골드 4",
        win_rate: 0.51,
        kda: 2.2,
        bio: "다이브 각 보이면 들어갑니다. 정글 백업 환영.",
        game_styles: &["공격적인", "즐겜러"],
        comm_styles: &["텐션 높은"],
    },
    CandidateSeed {
        id: 201,
        name: "제트원챔",
        tag: "제트원챔#VAL1",
        game: Game::Valorant,
        role: "duelist",
        tier: "골드 2",
        win_rate: 0.53,
        kda: 1.4,
        bio: "엔트리 전담. 사이트 먼저 들어가는 타입.",
        game_styles: &["공격적인", "빡겜러"],
        comm_styles: &["텐션 높은"],
    },
    CandidateSeed {
        id: 202,
        name: "소바장인",
        tag: "소바장인#VAL2",
        game: Game::Valorant,
        role: "initiator",
        tier: "플래티넘 3",
        win_rate: 0.56,
        kda: 1.2,
        bio: "정보 먹고 시작합시다. 드론 리콘 정확하게 쏩니다.",
        game_styles: &["오더형"],
        comm_styles: &["대화 많은", "차분한"],
    },
    CandidateSeed {
        id: 203,
        name: "연막의신",
        tag: "연막의신#VAL1",
        game: Game::Valorant,
        role: "controller",
        tier: "실버 2",
        win_rate: 0.48,
        kda: 1.0,
        bio: "연막 타이밍 하나는 자신 있습니다.",
        game_styles: &["수비적인", "팔로워형"],
        comm_styles: &["조용한"],
    },
    CandidateSeed {
        id: 204,
        name: "후미정리반",
        tag: "후미정리반#VAL3",
        game: Game::Valorant,
        role: "sentinel",
        tier: "골드 1",
        win_rate: 0.50,
        kda: 1.1,
        bio: "뒷정리 담당. 플랭크는 제가 봅니다.",
        game_styles: &["수비적인", "빡겜러"],
        comm_styles: &["차분한"],
    },
    CandidateSeed {
        id: 301,
        name: "에란겔택시",
        tag: "에란겔택시#PUBG",
        game: Game::Pubg,
        role: ALL_POSITIONS,
        tier: "플래티넘",
        win_rate: 0.18,
        kda: 0.0,
        bio: "차량 동선 담당. 자기장 끝까지 살아남는 운영.",
        game_styles: &["수비적인", "오더형"],
        comm_styles: &["대화 많은"],
    },
    CandidateSeed {
        id: 302,
        name: "기절만시킴",
        tag: "기절만시킴#PUBG",
        game: Game::Pubg,
        role: ALL_POSITIONS,
        tier: "골드",
        win_rate: 0.12,
        kda: 0.0,
        bio: "근접전 선호. 프라이팬 킬 수집 중.",
        game_styles: &["공격적인", "즐겜러"],
        comm_styles: &["텐션 높은"],
    },
    CandidateSeed {
        id: 303,
        name: "수풀속저격수",
        tag: "수풀속저격수#PUBG",
        game: Game::Pubg,
        role: ALL_POSITIONS,
        tier: "다이아",
        win_rate: 0.22,
        kda: 0.0,
        bio: "8배율 찾으면 게임 끝. 콜은 짧고 정확하게.",
        game_styles: &["빡겜러", "수비적인"],
        comm_styles: &["조용한", "차분한"],
    },
];

fn build_catalog() -> Vec<CandidateProfile> {
    SEEDS
        .iter()
        .map(|seed| CandidateProfile {
            id: seed.id,
            name: seed.name.to_string(),
            tag: seed.tag.to_string(),
            game: seed.game,
            role: seed.role.to_string(),
            tier: seed.tier.to_string(),
            win_rate: seed.win_rate,
            kda: seed.game.uses_kda().then_some(seed.kda),
            bio: seed.bio.to_string(),
            game_styles: seed.game_styles.iter().map(|s| s.to_string()).collect(),
            comm_styles: seed.comm_styles.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

/// The full static candidate catalog, in presentation order.
pub fn catalog() -> &'static [CandidateProfile] {
    static CATALOG: OnceLock<Vec<CandidateProfile>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

pub fn candidate_by_id(id: u32) -> Option<&'static CandidateProfile> {
    catalog().iter().find(|candidate| candidate.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pubg_skips_positions_and_kda() {
        assert!(!Game::Pubg.has_positions());
        assert!(!Game::Pubg.uses_kda());
        assert!(Game::Lol.has_positions());
        assert!(Game::Valorant.uses_kda());
    }

    #[test]
    fn catalog_roles_are_resolved_at_ingestion() {
        for candidate in catalog() {
            if candidate.game.has_positions() {
                assert!(candidate
                    .game
                    .positions()
                    .iter()
                    .any(|position| position.id == candidate.role));
            } else {
                assert_eq!(candidate.role, ALL_POSITIONS);
            }
            assert_eq!(candidate.kda.is_some(), candidate.game.uses_kda());
        }
    }

    #[test]
    fn tier_ids_round_trip() {
        let gold = &TIER_FAMILIES[3];
        assert_eq!(tier_id(gold, 2), "goldG2");
        let family = tier_family("goldG2").unwrap();
        assert_eq!(family.abbr, "G");
        assert_eq!(tier_label("goldG2"), "골드 2");
    }

    #[test]
    fn unknown_tier_id_falls_through() {
        assert!(tier_family("mythicX9").is_none());
        assert_eq!(tier_label("mythicX9"), "mythicX9");
    }
}
