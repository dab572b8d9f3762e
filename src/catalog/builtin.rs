use crate::{
    catalog::{
        AddOn,
        BatterySku,
        Catalog,
        CatalogEntry,
        PduCurrent,
        PduPrice,
        PduPriceTable,
        PduType,
        RackPrice,
        RackPriceTable,
        RackWidth,
    },
    quantity::{Quantity, cost::Cost, power::Kilowatts},
    selector::PowerLadder,
};

fn ups(model: &str, power: f64, price: f64, dimensions: &str) -> CatalogEntry {
    CatalogEntry::builder()
        .model(model)
        .power(Kilowatts::from(power))
        .price(Cost::from(price))
        .description(format!("Online double-conversion UPS, {power} kW"))
        .dimensions(dimensions)
        .build()
}

fn cooling(model: &str, power: f64, price: f64) -> CatalogEntry {
    CatalogEntry::builder()
        .model(model)
        .power(Kilowatts::from(power))
        .price(Cost::from(price))
        .description(format!("In-row precision air conditioner, {power} kW"))
        .dimensions("300x1200x2000")
        .build()
}

fn pdu(pdu_type: PduType, current: PduCurrent, price: f64) -> PduPrice {
    PduPrice { pdu_type, current, unit_price: Cost::from(price) }
}

fn battery(model: &str, capacity: f64, weight: f64, dimensions: &str, price: f64) -> BatterySku {
    BatterySku {
        model: model.to_owned(),
        capacity: Quantity(capacity),
        weight: Quantity(weight),
        dimensions: dimensions.to_owned(),
        price: Cost::from(price),
    }
}

fn add_on(name: &str, price: f64) -> AddOn {
    AddOn { name: name.to_owned(), price: Cost::from(price) }
}

impl Catalog {
    /// Compiled-in reference prices.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            it_ups: PowerLadder::from_array([
                ups("UPS-IT-10", 10.0, 8_500.0, "250x700x900"),
                ups("UPS-IT-20", 20.0, 14_900.0, "350x850x1400"),
                ups("UPS-IT-40", 40.0, 26_500.0, "600x850x2000"),
                ups("UPS-IT-60", 60.0, 37_800.0, "600x850x2000"),
                ups("UPS-IT-80", 80.0, 48_900.0, "600x1000x2000"),
                ups("UPS-IT-120", 120.0, 69_500.0, "800x1000x2000"),
                ups("UPS-IT-160", 160.0, 89_000.0, "1200x1000x2000"),
                ups("UPS-IT-200", 200.0, 109_000.0, "1600x1000x2000"),
            ]),
            ac_ups: PowerLadder::from_array([
                ups("UPS-AC-15", 15.0, 5_900.0, "250x700x900"),
                ups("UPS-AC-30", 30.0, 10_400.0, "350x850x1400"),
                ups("UPS-AC-60", 60.0, 18_900.0, "600x850x2000"),
                ups("UPS-AC-90", 90.0, 26_700.0, "600x1000x2000"),
                ups("UPS-AC-120", 120.0, 33_900.0, "800x1000x2000"),
                ups("UPS-AC-180", 180.0, 47_500.0, "1200x1000x2000"),
                ups("UPS-AC-250", 250.0, 62_000.0, "1600x1000x2000"),
            ]),
            cooling: vec![
                cooling("IRC12", 12.5, 9_800.0),
                cooling("IRC25", 25.0, 15_600.0),
                cooling("IRC35", 35.0, 19_900.0),
                cooling("IRC45", 45.0, 24_500.0),
                cooling("IRC60", 60.0, 31_200.0),
                cooling("IRC70", 70.0, 35_900.0),
            ],
            pdu: PduPriceTable::from(vec![
                pdu(PduType::Basic, PduCurrent::A16, 180.0),
                pdu(PduType::Basic, PduCurrent::A32, 260.0),
                pdu(PduType::Monitored, PduCurrent::A16, 420.0),
                pdu(PduType::Monitored, PduCurrent::A32, 540.0),
                pdu(PduType::Switched, PduCurrent::A16, 690.0),
                pdu(PduType::Switched, PduCurrent::A32, 860.0),
            ]),
            racks: RackPriceTable::from(vec![
                RackPrice {
                    width: RackWidth::W600,
                    name: "Server rack 42U 600x1200".to_owned(),
                    price: Cost::from(1_150.0),
                },
                RackPrice {
                    width: RackWidth::W800,
                    name: "Network rack 42U 800x1200".to_owned(),
                    price: Cost::from(1_450.0),
                },
            ]),
            batteries: vec![
                battery("SP12-26", 26.0, 8.5, "166x175x125", 54.95),
                battery("SP12-40", 40.0, 13.0, "197x165x170", 84.95),
                battery("SP12-65", 65.0, 21.5, "350x167x179", 129.95),
                battery("SP12-100", 100.0, 30.5, "330x171x215", 199.95),
                battery("SP12-150", 150.0, 44.0, "483x170x240", 289.95),
            ],
            monitoring: add_on("Environmental and power monitoring system", 4_800.0),
            corridor_isolation: add_on("Cold corridor containment", 7_500.0),
            distribution: add_on("Busway power distribution system", 6_200.0),
        }
    }
}
