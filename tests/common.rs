//! Test utilities & fixtures.
//! A small furnished world: one house, its owner, a customer and a vendor
//! standing inside the house.

#![allow(dead_code)]

use meshvendor::config::VendorConfig;
use meshvendor::vendor::{
    EconomyMode, Footprint, HouseId, HouseInfo, ItemId, ItemKind, Marketplace, MobileId,
    Placement, Point, Position, PriceOutcome, PromptKind, PromptOutcome, PromptRequest,
    PromptResponse, SimWorld,
};

pub const HOUSE: HouseId = HouseId(500);

pub fn house_footprint() -> Footprint {
    Footprint::new(Point::new(10, 10, 0), Point::new(20, 20, 0))
}

pub struct Shop {
    pub market: Marketplace<SimWorld>,
    pub owner: MobileId,
    pub buyer: MobileId,
    pub vendor: MobileId,
    pub storage: ItemId,
}

/// Where the vendor is placed when the shop opens.
pub enum Site {
    /// Inside [`HOUSE`], which uses modern storage rules.
    ModernHouse,
    /// Inside [`HOUSE`], which still uses old storage rules.
    OldHouse,
    /// Out in the open, no house at all.
    Street,
}

pub fn config(mode: EconomyMode) -> VendorConfig {
    VendorConfig {
        economy_mode: mode,
        ..VendorConfig::default()
    }
}

pub fn open_shop(mode: EconomyMode, site: Site) -> Shop {
    let (owner_at, buyer_at, vendor_at) = match site {
        Site::Street => (Point::new(41, 40, 0), Point::new(42, 40, 0), Point::new(40, 40, 0)),
        Site::ModernHouse | Site::OldHouse => {
            (Point::new(12, 12, 0), Point::new(13, 12, 0), Point::new(14, 14, 0))
        }
    };
    let mut world = SimWorld::new();
    let owner = world.spawn_mobile(Position::World(owner_at));
    let buyer = world.spawn_mobile(Position::World(buyer_at));
    world.set_purse(buyer, 10_000);
    if !matches!(site, Site::Street) {
        world.add_house(HouseInfo {
            id: HOUSE,
            owner,
            modern_storage: matches!(site, Site::ModernHouse),
            footprint: house_footprint(),
        });
    }
    let vendor = world.spawn_mobile(Position::World(vendor_at));
    let storage = world.spawn_item(ItemKind::Container { locked: false }, Placement::Backpack(vendor));

    let mut market = Marketplace::new(world, config(mode));
    market.open_vendor(vendor, owner, storage);
    Shop {
        market,
        owner,
        buyer,
        vendor,
        storage,
    }
}

impl Shop {
    /// Give the vendor an item of `kind` from the owner's pack and answer
    /// the price prompt with `answer`.
    pub fn stock(&mut self, kind: ItemKind, answer: &str) -> (ItemId, PriceOutcome) {
        let item = self
            .market
            .host_mut()
            .spawn_item(kind, Placement::Backpack(self.owner));
        let ticket = self
            .market
            .hand_over(self.vendor, self.owner, item)
            .expect("vendor is live")
            .expect("owner is prompted");
        let outcome = self.answer_price(PromptKind::Price(ticket), answer);
        (item, outcome)
    }

    pub fn answer_price(&mut self, kind: PromptKind, answer: &str) -> PriceOutcome {
        let prompt = PromptRequest {
            vendor: self.vendor,
            kind,
        };
        match self
            .market
            .answer_prompt(self.owner, prompt, PromptResponse::Text(answer.to_string()))
        {
            PromptOutcome::Price(outcome) => outcome,
            other => panic!("expected a price outcome, got {:?}", other),
        }
    }

    pub fn world(&self) -> &SimWorld {
        self.market.host()
    }
}
