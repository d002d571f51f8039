//! Canned chain and indexer state backing the harness endpoints.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use governance::model::{Dao, DaoToken, Proposal};
use governance::{Address, U256, address, deployments};

/// Indexer-shaped project row, goals still embedded as a JSON string.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ProjectRow {
    /// On-chain project identifier.
    #[serde(rename = "projectID")]
    pub project_id: u64,
    /// Project manager.
    pub manager: Address,
    /// Budget as a decimal string.
    pub budget: String,
    /// Deadline as Unix seconds.
    pub deadline: i64,
    /// Goals JSON string.
    pub goals: String,
}

/// One DAO with everything the harness serves for it.
#[derive(Clone, Debug)]
pub struct FixtureDao {
    /// The indexer entity.
    pub dao: Dao,
    /// Project rows.
    pub projects: Vec<ProjectRow>,
    /// Proposal rows.
    pub proposals: Vec<Proposal>,
    /// Whether the project-management extension is enabled on this DAO.
    pub extension_enabled: bool,
    /// Token balances per holder.
    pub balances: Vec<(Address, U256)>,
}

/// The harness chain: one chain id, a handful of DAOs.
#[derive(Clone, Debug)]
pub struct Fixtures {
    /// Chain id the harness reports.
    pub chain_id: u64,
    /// Known DAOs.
    pub daos: Vec<FixtureDao>,
}

/// Wallet account the e2e scenarios connect with.
#[must_use]
pub fn e2e_account() -> Address {
    address!("f952a72F39c5Fa22a443200AbE7835128bCb7439")
}

/// Manager of project #112 (not the e2e account).
#[must_use]
pub fn other_manager() -> Address {
    address!("8791f1612453a817919697ffA4895b17F6C77929")
}

/// Address of the `PMTest` DAO.
#[must_use]
pub fn pmtest_dao() -> Address {
    address!("e237747055b12f4da323bc559ac8d5eb66aac2f7")
}

/// Address of the `PMTest2` DAO.
#[must_use]
pub fn pmtest2_dao() -> Address {
    address!("a9b81dbca829594aac0dcae766bb12543eb7b079")
}

fn goals(title: &str, link: &str) -> String {
    serde_json::json!([{
        "goalTitle": title,
        "goalLink": link,
        "goalDescription": "",
    }])
    .to_string()
}

fn tokens(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u8).pow(U256::from(18u8))
}

impl Fixtures {
    /// The development fixture set the e2e scenarios run against.
    #[must_use]
    pub fn dev() -> Self {
        let pmtest = FixtureDao {
            dao: Dao {
                id: pmtest_dao(),
                token: DaoToken {
                    name: "PMTest".to_owned(),
                    symbol: "PMT".to_owned(),
                },
            },
            projects: vec![
                ProjectRow {
                    project_id: 109,
                    manager: e2e_account(),
                    budget: "2872.0".to_owned(),
                    // Thu, 11 Aug 2022 — expired.
                    deadline: 1_660_176_000,
                    goals: goals("Record a video", "https://github.com/orgs/pmtest/projects/2"),
                },
                ProjectRow {
                    project_id: 113,
                    manager: e2e_account(),
                    budget: "2233.0".to_owned(),
                    // Wed, 12 Dec 2323.
                    deadline: 11_169_360_000,
                    goals: goals(
                        "e2e test aug 20 2022",
                        "https://github.com/orgs/pmtest/projects/4",
                    ),
                },
            ],
            proposals: vec![
                Proposal {
                    serial: 41,
                    description: "New Project Proposal.\nGoal: Record a video".to_owned(),
                },
                Proposal {
                    serial: 42,
                    description: "New Project Proposal.\nGoal: e2e test aug 20 2022".to_owned(),
                },
            ],
            extension_enabled: true,
            balances: vec![(e2e_account(), tokens(1000))],
        };

        let pmtest2 = FixtureDao {
            dao: Dao {
                id: pmtest2_dao(),
                token: DaoToken {
                    name: "PMTest2".to_owned(),
                    symbol: "PMT2".to_owned(),
                },
            },
            projects: vec![ProjectRow {
                project_id: 112,
                manager: other_manager(),
                budget: "10000".to_owned(),
                // Sun, 18 Aug 2222.
                deadline: 7_972_128_000,
                goals: goals("PM testing", "https://github.com/orgs/pmtest/projects/3"),
            }],
            proposals: Vec::new(),
            extension_enabled: false,
            balances: vec![
                (e2e_account(), tokens(500)),
                (other_manager(), tokens(10)),
            ],
        };

        Self {
            chain_id: deployments::DEV_CHAIN_ID,
            daos: vec![pmtest, pmtest2],
        }
    }

    /// Look up a DAO by address.
    #[must_use]
    pub fn dao(&self, address: Address) -> Option<&FixtureDao> {
        self.daos.iter().find(|fixture| fixture.dao.id == address)
    }

    /// Token balance of `holder` at `dao` (zero for unknown pairs).
    #[must_use]
    pub fn balance_of(&self, dao: Address, holder: Address) -> U256 {
        self.dao(dao)
            .and_then(|fixture| {
                fixture
                    .balances
                    .iter()
                    .find(|(address, _)| *address == holder)
                    .map(|(_, balance)| *balance)
            })
            .unwrap_or(U256::ZERO)
    }

    /// Whether `extension` is enabled on `dao`.
    ///
    /// Only the chain's project-management extension address can be enabled;
    /// any other queried address reads as disabled.
    #[must_use]
    pub fn extension_enabled(&self, dao: Address, extension: Address) -> bool {
        let expected = deployments::project_management_extension(self.chain_id);
        expected == Some(extension)
            && self
                .dao(dao)
                .is_some_and(|fixture| fixture.extension_enabled)
    }
}
