//! Fake backends for the integration tests, one per contract generation.

#![allow(dead_code)]

use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, HashSet};

use vault_economy::{
    ensure_supported, Decimal, Economy, EconomyResponse, EconomyResult, FractionalDigits,
    IdentityEconomy, LedgerEconomy, LedgerResponse, Uuid,
};

// ============================================================================
// Legacy: name-keyed, with name-keyed banks
// ============================================================================

#[derive(Default)]
struct NameBankState {
    accounts: HashMap<String, f64>,
    banks: HashMap<String, (String, HashSet<String>, f64)>,
}

/// Name-keyed backend with bank support. Balances are global; the world
/// argument of every account call is only recorded.
pub struct NameBank {
    name: String,
    state: RwLock<NameBankState>,
    worlds: Mutex<Vec<Option<String>>>,
}

impl NameBank {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            state: RwLock::new(NameBankState::default()),
            worlds: Mutex::new(Vec::new()),
        }
    }

    /// World arguments received so far, oldest first.
    pub fn seen_worlds(&self) -> Vec<Option<String>> {
        self.worlds.lock().clone()
    }

    fn record(&self, world: Option<&str>) {
        self.worlds.lock().push(world.map(str::to_owned));
    }

    pub fn with_account(self, player: &str, balance: f64) -> Self {
        self.state.write().accounts.insert(player.to_owned(), balance);
        self
    }

    pub fn add_member(&self, bank: &str, player: &str) {
        if let Some((_, members, _)) = self.state.write().banks.get_mut(bank) {
            members.insert(player.to_owned());
        }
    }
}

impl Economy for NameBank {
    fn is_enabled(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_bank_support(&self) -> bool {
        true
    }

    fn fractional_digits(&self) -> FractionalDigits {
        FractionalDigits::NO_ROUNDING
    }

    fn format(&self, amount: f64) -> String {
        format!("{amount} {}", self.currency_name_plural())
    }

    fn currency_name_plural(&self) -> &str {
        "Dollars"
    }

    fn currency_name_singular(&self) -> &str {
        "Dollar"
    }

    fn has_account(&self, player_name: &str, world: Option<&str>) -> bool {
        self.record(world);
        self.state.read().accounts.contains_key(player_name)
    }

    fn balance(&self, player_name: &str, world: Option<&str>) -> f64 {
        self.record(world);
        self.state
            .read()
            .accounts
            .get(player_name)
            .copied()
            .unwrap_or(0.0)
    }

    fn has(&self, player_name: &str, world: Option<&str>, amount: f64) -> bool {
        self.balance(player_name, world) >= amount
    }

    fn withdraw_player(
        &self,
        player_name: &str,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse {
        self.record(world);
        let mut state = self.state.write();
        match state.accounts.get_mut(player_name) {
            Some(balance) if *balance >= amount => {
                *balance -= amount;
                EconomyResponse::success(amount, *balance)
            }
            Some(balance) => EconomyResponse::failure(0.0, *balance, "Insufficient funds"),
            None => EconomyResponse::failure(0.0, 0.0, "No such account"),
        }
    }

    fn deposit_player(
        &self,
        player_name: &str,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse {
        self.record(world);
        let mut state = self.state.write();
        match state.accounts.get_mut(player_name) {
            Some(balance) => {
                *balance += amount;
                EconomyResponse::success(amount, *balance)
            }
            None => EconomyResponse::failure(0.0, 0.0, "No such account"),
        }
    }

    fn create_player_account(&self, player_name: &str, world: Option<&str>) -> bool {
        self.record(world);
        let mut state = self.state.write();
        if state.accounts.contains_key(player_name) {
            return false;
        }
        state.accounts.insert(player_name.to_owned(), 0.0);
        true
    }

    fn create_bank(&self, name: &str, owner_name: &str) -> EconomyResponse {
        let mut state = self.state.write();
        if state.banks.contains_key(name) {
            return EconomyResponse::failure(0.0, 0.0, "Bank exists");
        }
        state
            .banks
            .insert(name.to_owned(), (owner_name.to_owned(), HashSet::new(), 0.0));
        EconomyResponse::success(0.0, 0.0)
    }

    fn delete_bank(&self, name: &str) -> EconomyResponse {
        match self.state.write().banks.remove(name) {
            Some((_, _, balance)) => EconomyResponse::success(0.0, balance),
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn bank_balance(&self, name: &str) -> EconomyResponse {
        match self.state.read().banks.get(name) {
            Some((_, _, balance)) => EconomyResponse::success(0.0, *balance),
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn bank_has(&self, name: &str, amount: f64) -> EconomyResponse {
        match self.state.read().banks.get(name) {
            Some((_, _, balance)) if *balance >= amount => {
                EconomyResponse::success(amount, *balance)
            }
            Some((_, _, balance)) => EconomyResponse::failure(amount, *balance, "Too poor"),
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn bank_withdraw(&self, name: &str, amount: f64) -> EconomyResponse {
        match self.state.write().banks.get_mut(name) {
            Some((_, _, balance)) if *balance >= amount => {
                *balance -= amount;
                EconomyResponse::success(amount, *balance)
            }
            Some((_, _, balance)) => EconomyResponse::failure(0.0, *balance, "Too poor"),
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn bank_deposit(&self, name: &str, amount: f64) -> EconomyResponse {
        match self.state.write().banks.get_mut(name) {
            Some((_, _, balance)) => {
                *balance += amount;
                EconomyResponse::success(amount, *balance)
            }
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn is_bank_owner(&self, name: &str, player_name: &str) -> EconomyResponse {
        match self.state.read().banks.get(name) {
            Some((owner, _, balance)) if owner == player_name => {
                EconomyResponse::success(0.0, *balance)
            }
            Some((_, _, balance)) => EconomyResponse::failure(0.0, *balance, "Not the owner"),
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn is_bank_member(&self, name: &str, player_name: &str) -> EconomyResponse {
        match self.state.read().banks.get(name) {
            Some((owner, members, balance))
                if owner == player_name || members.contains(player_name) =>
            {
                EconomyResponse::success(0.0, *balance)
            }
            Some((_, _, balance)) => EconomyResponse::failure(0.0, *balance, "Not a member"),
            None => EconomyResponse::failure(0.0, 0.0, "No such bank"),
        }
    }

    fn banks(&self) -> Vec<String> {
        let mut names: Vec<_> = self.state.read().banks.keys().cloned().collect();
        names.sort();
        names
    }
}

// ============================================================================
// Identity: UUID-keyed, single world, no banks
// ============================================================================

/// Capability switches of [`UuidBank`].
#[derive(Clone, Copy, Debug)]
pub struct Capabilities {
    pub all_records: bool,
    pub all_online: bool,
    pub offline: bool,
}

impl Capabilities {
    pub const FULL: Self = Self {
        all_records: true,
        all_online: true,
        offline: true,
    };
}

/// UUID-keyed backend. Ignores worlds and uses the global account instead.
pub struct UuidBank {
    name: String,
    capabilities: Capabilities,
    accounts: RwLock<HashMap<Uuid, (String, f64)>>,
    online: RwLock<HashSet<Uuid>>,
    banks: vault_economy::NoBankSupport,
}

impl UuidBank {
    pub fn new(name: &str, capabilities: Capabilities) -> Self {
        Self {
            name: name.to_owned(),
            capabilities,
            accounts: RwLock::new(HashMap::new()),
            online: RwLock::new(HashSet::new()),
            banks: vault_economy::NoBankSupport::new("UuidBank has no banks"),
        }
    }

    pub fn set_online(&self, id: Uuid) {
        self.online.write().insert(id);
    }

    fn id_by_name(&self, name: &str) -> Option<Uuid> {
        self.accounts
            .read()
            .iter()
            .find(|(_, (n, _))| n == name)
            .map(|(id, _)| *id)
    }

    fn change(&self, id: Uuid, delta: f64) -> EconomyResponse {
        let mut accounts = self.accounts.write();
        match accounts.get_mut(&id) {
            Some((_, balance)) if *balance + delta >= 0.0 => {
                *balance += delta;
                EconomyResponse::success(delta.abs(), *balance)
            }
            Some((_, balance)) => EconomyResponse::failure(0.0, *balance, "Insufficient funds"),
            None => EconomyResponse::failure(0.0, 0.0, "No such account"),
        }
    }
}

impl Economy for UuidBank {
    fn is_enabled(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_bank_support(&self) -> bool {
        vault_economy::NoBankSupport::has_bank_support()
    }

    fn fractional_digits(&self) -> FractionalDigits {
        FractionalDigits::new(2)
    }

    fn format(&self, amount: f64) -> String {
        format!("{:.2} {}", self.fractional_digits().round_amount(amount), self.name)
    }

    fn currency_name_plural(&self) -> &str {
        ""
    }

    fn currency_name_singular(&self) -> &str {
        ""
    }

    fn has_account(&self, player_name: &str, _world: Option<&str>) -> bool {
        self.id_by_name(player_name).is_some()
    }

    fn balance(&self, player_name: &str, _world: Option<&str>) -> f64 {
        self.id_by_name(player_name)
            .and_then(|id| self.accounts.read().get(&id).map(|(_, b)| *b))
            .unwrap_or(0.0)
    }

    fn has(&self, player_name: &str, world: Option<&str>, amount: f64) -> bool {
        self.balance(player_name, world) >= amount
    }

    fn withdraw_player(
        &self,
        player_name: &str,
        _world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse {
        match self.id_by_name(player_name) {
            Some(id) => self.change(id, -amount),
            None => EconomyResponse::failure(0.0, 0.0, "No such account"),
        }
    }

    fn deposit_player(
        &self,
        player_name: &str,
        _world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse {
        match self.id_by_name(player_name) {
            Some(id) => self.change(id, amount),
            None => EconomyResponse::failure(0.0, 0.0, "No such account"),
        }
    }

    fn create_player_account(&self, _player_name: &str, _world: Option<&str>) -> bool {
        false
    }

    fn create_bank(&self, _name: &str, _owner_name: &str) -> EconomyResponse {
        self.banks.response()
    }

    fn delete_bank(&self, _name: &str) -> EconomyResponse {
        self.banks.response()
    }

    fn bank_balance(&self, _name: &str) -> EconomyResponse {
        self.banks.response()
    }

    fn bank_has(&self, _name: &str, _amount: f64) -> EconomyResponse {
        self.banks.response()
    }

    fn bank_withdraw(&self, _name: &str, _amount: f64) -> EconomyResponse {
        self.banks.response()
    }

    fn bank_deposit(&self, _name: &str, _amount: f64) -> EconomyResponse {
        self.banks.response()
    }

    fn is_bank_owner(&self, _name: &str, _player_name: &str) -> EconomyResponse {
        self.banks.response()
    }

    fn is_bank_member(&self, _name: &str, _player_name: &str) -> EconomyResponse {
        self.banks.response()
    }

    fn banks(&self) -> Vec<String> {
        self.banks.banks()
    }
}

impl IdentityEconomy for UuidBank {
    fn supports_all_records_operation(&self) -> bool {
        self.capabilities.all_records
    }

    fn supports_all_online_operation(&self) -> bool {
        self.capabilities.all_online
    }

    fn supports_offline_operations(&self) -> bool {
        self.capabilities.offline
    }

    fn supports_uuid_operations(&self) -> bool {
        true
    }

    fn create_account(&self, id: Uuid, name: &str, _world: Option<&str>) -> EconomyResult<bool> {
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&id) {
            return Ok(false);
        }
        accounts.insert(id, (name.to_owned(), 0.0));
        Ok(true)
    }

    fn all_records(&self) -> EconomyResult<HashMap<Uuid, String>> {
        ensure_supported(self.capabilities.all_records, "all_records", &self.name)?;
        Ok(self
            .accounts
            .read()
            .iter()
            .map(|(id, (name, _))| (*id, name.clone()))
            .collect())
    }

    fn all_online(&self) -> EconomyResult<Vec<Uuid>> {
        ensure_supported(self.capabilities.all_online, "all_online", &self.name)?;
        let accounts = self.accounts.read();
        Ok(self
            .online
            .read()
            .iter()
            .filter(|id| accounts.contains_key(id))
            .copied()
            .collect())
    }

    fn account_name(&self, id: Uuid) -> EconomyResult<Option<String>> {
        Ok(self.accounts.read().get(&id).map(|(name, _)| name.clone()))
    }

    fn has_account_by_id(&self, id: Uuid, _world: Option<&str>) -> EconomyResult<bool> {
        Ok(self.accounts.read().contains_key(&id))
    }

    fn rename_account(&self, id: Uuid, name: &str) -> EconomyResult<bool> {
        Ok(match self.accounts.write().get_mut(&id) {
            Some((current, _)) => {
                *current = name.to_owned();
                true
            }
            None => false,
        })
    }

    fn balance_by_id(&self, id: Uuid, _world: Option<&str>) -> EconomyResult<f64> {
        Ok(self.accounts.read().get(&id).map_or(0.0, |(_, b)| *b))
    }

    fn has_by_id(&self, id: Uuid, world: Option<&str>, amount: f64) -> EconomyResult<bool> {
        Ok(self.balance_by_id(id, world)? >= amount)
    }

    fn withdraw(&self, id: Uuid, _world: Option<&str>, amount: f64) -> EconomyResponse {
        self.change(id, -amount)
    }

    fn deposit(&self, id: Uuid, _world: Option<&str>, amount: f64) -> EconomyResponse {
        self.change(id, amount)
    }

    fn create_bank_for(&self, _name: &str, _owner: Uuid) -> EconomyResponse {
        self.banks.response()
    }

    fn is_bank_owner_by_id(&self, _name: &str, _id: Uuid) -> EconomyResponse {
        self.banks.response()
    }

    fn is_bank_member_by_id(&self, _name: &str, _id: Uuid) -> EconomyResponse {
        self.banks.response()
    }
}

// ============================================================================
// Ledger: UUID-keyed, Decimal amounts, UUID-keyed banks
// ============================================================================

struct LedgerBank {
    name: String,
    owner: Uuid,
    members: HashSet<Uuid>,
    balance: Decimal,
}

#[derive(Default)]
struct LedgerState {
    accounts: HashMap<Uuid, (String, Decimal)>,
    banks: HashMap<Uuid, LedgerBank>,
}

/// Decimal ledger with banks.
pub struct DecimalLedger {
    name: String,
    state: RwLock<LedgerState>,
}

impl DecimalLedger {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            state: RwLock::new(LedgerState::default()),
        }
    }

    pub fn bank_id(&self, name: &str) -> Option<Uuid> {
        self.state
            .read()
            .banks
            .iter()
            .find(|(_, bank)| bank.name == name)
            .map(|(id, _)| *id)
    }

    pub fn add_member(&self, bank: Uuid, member: Uuid) -> bool {
        match self.state.write().banks.get_mut(&bank) {
            Some(b) => b.members.insert(member),
            None => false,
        }
    }
}

impl LedgerEconomy for DecimalLedger {
    fn is_enabled(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_bank_support(&self) -> bool {
        true
    }

    fn fractional_digits(&self) -> FractionalDigits {
        FractionalDigits::NO_ROUNDING
    }

    fn format(&self, amount: Decimal) -> String {
        format!("{amount} credits")
    }

    fn currency_name_plural(&self) -> &str {
        "credits"
    }

    fn currency_name_singular(&self) -> &str {
        "credit"
    }

    fn create_account(&self, id: Uuid, name: &str, _world: Option<&str>) -> bool {
        let mut state = self.state.write();
        if state.accounts.contains_key(&id) {
            return false;
        }
        state.accounts.insert(id, (name.to_owned(), Decimal::ZERO));
        true
    }

    fn uuid_name_map(&self) -> HashMap<Uuid, String> {
        self.state
            .read()
            .accounts
            .iter()
            .map(|(id, (name, _))| (*id, name.clone()))
            .collect()
    }

    fn account_name(&self, id: Uuid) -> Option<String> {
        self.state.read().accounts.get(&id).map(|(n, _)| n.clone())
    }

    fn has_account(&self, id: Uuid, _world: Option<&str>) -> bool {
        self.state.read().accounts.contains_key(&id)
    }

    fn rename_account(&self, id: Uuid, name: &str) -> bool {
        match self.state.write().accounts.get_mut(&id) {
            Some((current, _)) => {
                *current = name.to_owned();
                true
            }
            None => false,
        }
    }

    fn balance(&self, id: Uuid, _world: Option<&str>) -> Decimal {
        self.state
            .read()
            .accounts
            .get(&id)
            .map_or(Decimal::ZERO, |(_, b)| *b)
    }

    fn has(&self, id: Uuid, world: Option<&str>, amount: Decimal) -> bool {
        self.balance(id, world) >= amount
    }

    fn withdraw(&self, id: Uuid, _world: Option<&str>, amount: Decimal) -> LedgerResponse {
        match self.state.write().accounts.get_mut(&id) {
            Some((_, balance)) if *balance >= amount => {
                *balance -= amount;
                LedgerResponse::success(amount, *balance)
            }
            Some((_, balance)) => {
                LedgerResponse::failure(Decimal::ZERO, *balance, "Insufficient funds")
            }
            None => LedgerResponse::failure(Decimal::ZERO, Decimal::ZERO, "No such account"),
        }
    }

    fn deposit(&self, id: Uuid, _world: Option<&str>, amount: Decimal) -> LedgerResponse {
        match self.state.write().accounts.get_mut(&id) {
            Some((_, balance)) => {
                *balance += amount;
                LedgerResponse::success(amount, *balance)
            }
            None => LedgerResponse::failure(Decimal::ZERO, Decimal::ZERO, "No such account"),
        }
    }

    fn create_bank(&self, name: &str, owner: Uuid) -> bool {
        let mut state = self.state.write();
        if state.banks.values().any(|b| b.name == name) {
            return false;
        }
        state.banks.insert(
            Uuid::new_v4(),
            LedgerBank {
                name: name.to_owned(),
                owner,
                members: HashSet::new(),
                balance: Decimal::ZERO,
            },
        );
        true
    }

    fn delete_bank(&self, bank: Uuid) -> bool {
        self.state.write().banks.remove(&bank).is_some()
    }

    fn bank_uuid_name_map(&self) -> HashMap<Uuid, String> {
        self.state
            .read()
            .banks
            .iter()
            .map(|(id, b)| (*id, b.name.clone()))
            .collect()
    }

    fn bank_account_name(&self, bank: Uuid) -> Option<String> {
        self.state.read().banks.get(&bank).map(|b| b.name.clone())
    }

    fn has_bank_account(&self, bank: Uuid) -> bool {
        self.state.read().banks.contains_key(&bank)
    }

    fn rename_bank_account(&self, bank: Uuid, name: &str) -> bool {
        match self.state.write().banks.get_mut(&bank) {
            Some(b) => {
                b.name = name.to_owned();
                true
            }
            None => false,
        }
    }

    fn bank_balance(&self, bank: Uuid) -> Decimal {
        self.state
            .read()
            .banks
            .get(&bank)
            .map_or(Decimal::ZERO, |b| b.balance)
    }

    fn bank_has(&self, bank: Uuid, amount: Decimal) -> bool {
        self.bank_balance(bank) >= amount
    }

    fn bank_withdraw(&self, bank: Uuid, amount: Decimal) -> LedgerResponse {
        match self.state.write().banks.get_mut(&bank) {
            Some(b) if b.balance >= amount => {
                b.balance -= amount;
                LedgerResponse::success(amount, b.balance)
            }
            Some(b) => LedgerResponse::failure(Decimal::ZERO, b.balance, "Insufficient funds"),
            None => LedgerResponse::failure(Decimal::ZERO, Decimal::ZERO, "No such bank"),
        }
    }

    fn bank_deposit(&self, bank: Uuid, amount: Decimal) -> LedgerResponse {
        match self.state.write().banks.get_mut(&bank) {
            Some(b) => {
                b.balance += amount;
                LedgerResponse::success(amount, b.balance)
            }
            None => LedgerResponse::failure(Decimal::ZERO, Decimal::ZERO, "No such bank"),
        }
    }

    fn is_bank_owner(&self, id: Uuid, bank: Uuid) -> bool {
        self.state
            .read()
            .banks
            .get(&bank)
            .is_some_and(|b| b.owner == id)
    }

    fn is_bank_member(&self, id: Uuid, bank: Uuid) -> bool {
        self.state
            .read()
            .banks
            .get(&bank)
            .is_some_and(|b| b.owner == id || b.members.contains(&id))
    }

    fn banks(&self) -> Vec<Uuid> {
        self.state.read().banks.keys().copied().collect()
    }
}
