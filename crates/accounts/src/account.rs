use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{Aggregate, AggregateId, AggregateRoot, CustomerId, DomainError};
use atelier_events::Event;

/// Credit account identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub AggregateId);

impl AccountId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: CreditAccount.
///
/// Holds a customer's prepaid balance in minor currency units. The balance
/// invariant (never negative) is checked in `handle`; `apply` only commits
/// already-validated changes, so a rejected command leaves the account
/// untouched and no partial update is ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditAccount {
    id: AccountId,
    customer_id: Option<CustomerId>,
    balance_minor: i64,
    version: u64,
    open: bool,
}

impl CreditAccount {
    /// Create an empty, not-yet-opened aggregate instance for rehydration.
    pub fn empty(id: AccountId) -> Self {
        Self {
            id,
            customer_id: None,
            balance_minor: 0,
            version: 0,
            open: false,
        }
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    /// Current balance in minor currency units. Never negative; never fails.
    pub fn balance_minor(&self) -> i64 {
        self.balance_minor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl AggregateRoot for CreditAccount {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: OpenAccount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAccount {
    pub account_id: AccountId,
    pub customer_id: CustomerId,
    /// Initial balance in minor units; must already satisfy the invariant.
    pub opening_balance_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub account_id: AccountId,
    pub amount_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Withdraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdraw {
    pub account_id: AccountId,
    pub amount_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    OpenAccount(OpenAccount),
    Deposit(Deposit),
    Withdraw(Withdraw),
}

/// Event: AccountOpened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOpened {
    pub account_id: AccountId,
    pub customer_id: CustomerId,
    pub opening_balance_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FundsDeposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsDeposited {
    pub account_id: AccountId,
    pub amount_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FundsWithdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsWithdrawn {
    pub account_id: AccountId,
    pub amount_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    AccountOpened(AccountOpened),
    FundsDeposited(FundsDeposited),
    FundsWithdrawn(FundsWithdrawn),
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::AccountOpened(_) => "accounts.account.opened",
            AccountEvent::FundsDeposited(_) => "accounts.account.funds_deposited",
            AccountEvent::FundsWithdrawn(_) => "accounts.account.funds_withdrawn",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AccountEvent::AccountOpened(e) => e.occurred_at,
            AccountEvent::FundsDeposited(e) => e.occurred_at,
            AccountEvent::FundsWithdrawn(e) => e.occurred_at,
        }
    }
}

impl Aggregate for CreditAccount {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            AccountEvent::AccountOpened(e) => {
                self.id = e.account_id;
                self.customer_id = Some(e.customer_id);
                self.balance_minor = e.opening_balance_minor;
                self.open = true;
            }
            AccountEvent::FundsDeposited(e) => {
                self.balance_minor += e.amount_minor;
            }
            AccountEvent::FundsWithdrawn(e) => {
                self.balance_minor -= e.amount_minor;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::OpenAccount(cmd) => self.handle_open(cmd),
            AccountCommand::Deposit(cmd) => self.handle_deposit(cmd),
            AccountCommand::Withdraw(cmd) => self.handle_withdraw(cmd),
        }
    }
}

impl CreditAccount {
    fn ensure_account_id(&self, account_id: AccountId) -> Result<(), DomainError> {
        if self.id != account_id {
            return Err(DomainError::invalid_argument("account_id mismatch"));
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if !self.open {
            return Err(DomainError::invalid_state("account is not open"));
        }
        Ok(())
    }

    fn handle_open(&self, cmd: &OpenAccount) -> Result<Vec<AccountEvent>, DomainError> {
        if self.open {
            return Err(DomainError::invalid_state("account is already open"));
        }
        if cmd.opening_balance_minor < 0 {
            return Err(DomainError::invalid_argument(
                "opening balance cannot be negative",
            ));
        }
        Ok(vec![AccountEvent::AccountOpened(AccountOpened {
            account_id: cmd.account_id,
            customer_id: cmd.customer_id,
            opening_balance_minor: cmd.opening_balance_minor,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_deposit(&self, cmd: &Deposit) -> Result<Vec<AccountEvent>, DomainError> {
        self.ensure_open()?;
        self.ensure_account_id(cmd.account_id)?;

        if cmd.amount_minor <= 0 {
            return Err(DomainError::invalid_argument(
                "deposit amount must be positive",
            ));
        }

        Ok(vec![AccountEvent::FundsDeposited(FundsDeposited {
            account_id: cmd.account_id,
            amount_minor: cmd.amount_minor,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_withdraw(&self, cmd: &Withdraw) -> Result<Vec<AccountEvent>, DomainError> {
        self.ensure_open()?;
        self.ensure_account_id(cmd.account_id)?;

        if cmd.amount_minor <= 0 {
            return Err(DomainError::invalid_argument(
                "withdrawal amount must be positive",
            ));
        }
        if cmd.amount_minor > self.balance_minor {
            return Err(DomainError::invalid_state("withdrawal exceeds balance"));
        }

        Ok(vec![AccountEvent::FundsWithdrawn(FundsWithdrawn {
            account_id: cmd.account_id,
            amount_minor: cmd.amount_minor,
            occurred_at: cmd.occurred_at,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::AggregateId;
    use proptest::prelude::*;

    fn test_account_id() -> AccountId {
        AccountId::new(AggregateId::new())
    }

    fn test_customer_id() -> CustomerId {
        CustomerId::new()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn opened_account(account_id: AccountId, opening_balance_minor: i64) -> CreditAccount {
        let mut account = CreditAccount::empty(account_id);
        let cmd = AccountCommand::OpenAccount(OpenAccount {
            account_id,
            customer_id: test_customer_id(),
            opening_balance_minor,
            occurred_at: test_time(),
        });
        for ev in account.handle(&cmd).unwrap() {
            account.apply(&ev);
        }
        account
    }

    #[test]
    fn open_account_reads_back_opening_balance() {
        let account_id = test_account_id();
        let account = opened_account(account_id, 100);

        assert!(account.is_open());
        assert_eq!(account.balance_minor(), 100);
        assert_eq!(account.version(), 1);
    }

    #[test]
    fn open_account_with_zero_balance_is_valid() {
        let account = opened_account(test_account_id(), 0);
        assert_eq!(account.balance_minor(), 0);
    }

    #[test]
    fn open_account_rejects_negative_opening_balance() {
        let account_id = test_account_id();
        let account = CreditAccount::empty(account_id);
        let cmd = AccountCommand::OpenAccount(OpenAccount {
            account_id,
            customer_id: test_customer_id(),
            opening_balance_minor: -1,
            occurred_at: test_time(),
        });

        let err = account.handle(&cmd).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn open_account_rejects_reopening() {
        let account_id = test_account_id();
        let account = opened_account(account_id, 50);
        let cmd = AccountCommand::OpenAccount(OpenAccount {
            account_id,
            customer_id: test_customer_id(),
            opening_balance_minor: 10,
            occurred_at: test_time(),
        });

        let err = account.handle(&cmd).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn deposit_increases_balance() {
        let account_id = test_account_id();
        let mut account = opened_account(account_id, 100);
        let cmd = AccountCommand::Deposit(Deposit {
            account_id,
            amount_minor: 50,
            occurred_at: test_time(),
        });

        for ev in account.handle(&cmd).unwrap() {
            account.apply(&ev);
        }
        assert_eq!(account.balance_minor(), 150);
    }

    #[test]
    fn deposit_rejects_non_positive_amount() {
        let account_id = test_account_id();
        let account = opened_account(account_id, 100);

        for amount_minor in [0, -25] {
            let cmd = AccountCommand::Deposit(Deposit {
                account_id,
                amount_minor,
                occurred_at: test_time(),
            });
            let err = account.handle(&cmd).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
    }

    #[test]
    fn withdraw_decreases_balance() {
        let account_id = test_account_id();
        let mut account = opened_account(account_id, 100);
        let cmd = AccountCommand::Withdraw(Withdraw {
            account_id,
            amount_minor: 60,
            occurred_at: test_time(),
        });

        for ev in account.handle(&cmd).unwrap() {
            account.apply(&ev);
        }
        assert_eq!(account.balance_minor(), 40);
    }

    #[test]
    fn withdraw_of_entire_balance_is_valid() {
        let account_id = test_account_id();
        let mut account = opened_account(account_id, 75);
        let cmd = AccountCommand::Withdraw(Withdraw {
            account_id,
            amount_minor: 75,
            occurred_at: test_time(),
        });

        for ev in account.handle(&cmd).unwrap() {
            account.apply(&ev);
        }
        assert_eq!(account.balance_minor(), 0);
    }

    #[test]
    fn overdraft_is_rejected_and_balance_unchanged() {
        let account_id = test_account_id();
        let mut account = opened_account(account_id, 100);

        let deposit = AccountCommand::Deposit(Deposit {
            account_id,
            amount_minor: 50,
            occurred_at: test_time(),
        });
        for ev in account.handle(&deposit).unwrap() {
            account.apply(&ev);
        }
        assert_eq!(account.balance_minor(), 150);

        let withdraw = AccountCommand::Withdraw(Withdraw {
            account_id,
            amount_minor: 200,
            occurred_at: test_time(),
        });
        let err = account.handle(&withdraw).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
        assert_eq!(account.balance_minor(), 150);
    }

    #[test]
    fn operations_on_unopened_account_are_rejected() {
        let account_id = test_account_id();
        let account = CreditAccount::empty(account_id);

        let deposit = AccountCommand::Deposit(Deposit {
            account_id,
            amount_minor: 10,
            occurred_at: test_time(),
        });
        let err = account.handle(&deposit).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));

        let withdraw = AccountCommand::Withdraw(Withdraw {
            account_id,
            amount_minor: 10,
            occurred_at: test_time(),
        });
        let err = account.handle(&withdraw).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let account_id = test_account_id();
        let account = opened_account(account_id, 100);
        let before = account.clone();

        let cmd = AccountCommand::Withdraw(Withdraw {
            account_id,
            amount_minor: 40,
            occurred_at: test_time(),
        });
        let events1 = account.handle(&cmd).unwrap();
        let events2 = account.handle(&cmd).unwrap();

        assert_eq!(account, before);
        assert_eq!(events1, events2);
    }

    #[test]
    fn version_increments_on_apply() {
        let account_id = test_account_id();
        let mut account = opened_account(account_id, 100);
        assert_eq!(account.version(), 1);

        let cmd = AccountCommand::Deposit(Deposit {
            account_id,
            amount_minor: 5,
            occurred_at: test_time(),
        });
        for ev in account.handle(&cmd).unwrap() {
            account.apply(&ev);
        }
        assert_eq!(account.version(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any opening balance and any sequence of deposit and
        /// withdrawal attempts, the balance is never observable below zero and
        /// always equals the opening balance plus accepted deposits minus
        /// accepted withdrawals.
        #[test]
        fn balance_never_goes_negative(
            opening in 0i64..1_000_000i64,
            ops in prop::collection::vec((any::<bool>(), 1i64..100_000i64), 0..32),
        ) {
            let account_id = test_account_id();
            let mut account = CreditAccount::empty(account_id);
            let open_cmd = AccountCommand::OpenAccount(OpenAccount {
                account_id,
                customer_id: test_customer_id(),
                opening_balance_minor: opening,
                occurred_at: test_time(),
            });
            for ev in account.handle(&open_cmd).unwrap() {
                account.apply(&ev);
            }

            let mut expected = opening;
            for (is_deposit, amount_minor) in ops {
                let cmd = if is_deposit {
                    AccountCommand::Deposit(Deposit {
                        account_id,
                        amount_minor,
                        occurred_at: test_time(),
                    })
                } else {
                    AccountCommand::Withdraw(Withdraw {
                        account_id,
                        amount_minor,
                        occurred_at: test_time(),
                    })
                };

                match account.handle(&cmd) {
                    Ok(events) => {
                        for ev in &events {
                            account.apply(ev);
                        }
                        expected += if is_deposit { amount_minor } else { -amount_minor };
                    }
                    Err(DomainError::InvalidState(_)) => {
                        // Only an overdraft attempt is rejected here.
                        prop_assert!(!is_deposit);
                        prop_assert!(amount_minor > account.balance_minor());
                    }
                    Err(e) => prop_assert!(false, "unexpected error: {e}"),
                }

                prop_assert!(account.balance_minor() >= 0);
                prop_assert_eq!(account.balance_minor(), expected);
            }
        }

        /// Property: the version grows by exactly one per applied event.
        #[test]
        fn version_tracks_applied_events(deposits in prop::collection::vec(1i64..10_000i64, 0..16)) {
            let account_id = test_account_id();
            let mut account = opened_account(account_id, 0);
            let mut applied: u64 = 1;

            for amount_minor in deposits {
                let cmd = AccountCommand::Deposit(Deposit {
                    account_id,
                    amount_minor,
                    occurred_at: test_time(),
                });
                for ev in account.handle(&cmd).unwrap() {
                    account.apply(&ev);
                    applied += 1;
                }
                prop_assert_eq!(account.version(), applied);
            }
        }
    }
}
