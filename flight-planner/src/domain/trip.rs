//! Trip types.
//!
//! A `Trip` is an itinerary from the query origin, either partial (while the
//! planner is still extending it) or complete (once it has reached the
//! destination and been finalized).

use std::sync::Arc;

use super::{AirportCode, FlightRecord, TravelTime};

/// A sequence of connecting flights starting at an origin airport.
///
/// Trips are values: extending a trip produces a new one and leaves the
/// original untouched, so every branch of the search owns its own state.
/// Flight records are shared with the index through `Arc`, so copying a
/// trip only copies pointers.
///
/// # Invariants
///
/// - `stops` starts with the origin and never contains an airport twice
/// - Each flight departs strictly after the previous one arrives
/// - `bags_allowed` is the minimum allowance over all flights
///   (`u32::MAX` while the trip has no flights)
#[derive(Debug, Clone)]
pub struct Trip {
    origin: AirportCode,
    destination: AirportCode,
    bags_count: u32,
    flights: Vec<Arc<FlightRecord>>,
    stops: Vec<AirportCode>,
    total_price: f64,
    travel_secs: i64,
    bags_allowed: u32,
    travel_time: Option<TravelTime>,
}

impl Trip {
    /// Creates an empty trip standing at `origin`.
    pub fn new(origin: AirportCode, destination: AirportCode, bags_count: u32) -> Self {
        Self {
            origin,
            destination,
            bags_count,
            flights: Vec::new(),
            stops: vec![origin],
            total_price: 0.0,
            travel_secs: 0,
            bags_allowed: u32::MAX,
            travel_time: None,
        }
    }

    /// Returns a copy of this trip extended by `flight`.
    ///
    /// Price grows by the base fare, then by the bag fees; travel time
    /// grows by the flight duration plus the layover since the previous
    /// arrival. Admissibility is the caller's concern.
    pub fn extended_with(&self, flight: &Arc<FlightRecord>) -> Self {
        let mut next = self.clone();

        next.stops.push(flight.destination);
        next.total_price += flight.base_price;
        next.total_price += f64::from(self.bags_count) * flight.bag_price;
        next.travel_secs += flight.duration_secs();
        if let Some(previous) = self.last_flight() {
            next.travel_secs += flight.layover_after(previous).num_seconds();
        }
        next.bags_allowed = next.bags_allowed.min(flight.bags_allowed);
        next.flights.push(Arc::clone(flight));

        next
    }

    /// Renders the travel time, marking the trip as a complete result.
    pub fn finalize(mut self) -> Self {
        self.travel_time = Some(TravelTime::from_secs(self.travel_secs));
        self
    }

    /// Builds the round-trip itinerary made of this trip followed by `back`.
    ///
    /// Flights are concatenated, prices summed and the bag allowance is the
    /// smaller of the two. Origin, destination, stops and accumulated travel
    /// seconds stay those of `self`, so the rendered travel time covers the
    /// outbound leg only.
    pub fn combined_with(&self, back: &Trip) -> Self {
        let mut combined = self.clone();

        combined.flights.extend(back.flights.iter().cloned());
        combined.bags_allowed = self.bags_allowed.min(back.bags_allowed);
        combined.total_price += back.total_price;

        combined.finalize()
    }

    /// Returns the airport the trip currently stands at.
    pub fn current_stop(&self) -> AirportCode {
        // stops always holds at least the origin
        self.stops.last().copied().unwrap_or(self.origin)
    }

    /// Returns true if the trip currently stands at `airport`.
    pub fn is_at(&self, airport: &AirportCode) -> bool {
        self.current_stop() == *airport
    }

    /// Returns true if `airport` is already one of the visited stops.
    pub fn has_visited(&self, airport: &AirportCode) -> bool {
        self.stops.contains(airport)
    }

    /// Returns the most recently appended flight.
    pub fn last_flight(&self) -> Option<&FlightRecord> {
        self.flights.last().map(|f| f.as_ref())
    }

    /// Returns the flights in travel order.
    pub fn flights(&self) -> &[Arc<FlightRecord>] {
        &self.flights
    }

    /// Returns the number of flights.
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns the visited airports, starting with the origin.
    pub fn stops(&self) -> &[AirportCode] {
        &self.stops
    }

    /// Returns the query origin.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the query destination.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the number of bags the traveller checks in.
    pub fn bags_count(&self) -> u32 {
        self.bags_count
    }

    /// Returns the smallest bag allowance over all flights.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the accumulated price including bags.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns the accumulated flight and layover time in seconds.
    pub fn travel_secs(&self) -> i64 {
        self.travel_secs
    }

    /// Returns the rendered travel time, once the trip has been finalized.
    pub fn travel_time(&self) -> Option<TravelTime> {
        self.travel_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn flight(
        no: &str,
        from: &str,
        to: &str,
        dep: &str,
        arr: &str,
        price: f64,
        bag: f64,
        bags: u32,
    ) -> Arc<FlightRecord> {
        Arc::new(FlightRecord {
            flight_no: no.to_string(),
            origin: code(from),
            destination: code(to),
            departure: Timestamp::parse(dep).unwrap(),
            arrival: Timestamp::parse(arr).unwrap(),
            base_price: price,
            bag_price: bag,
            bags_allowed: bags,
        })
    }

    fn xc233() -> Arc<FlightRecord> {
        flight(
            "XC233",
            "BTW",
            "WTF",
            "2021-09-02T05:50:00",
            "2021-09-02T08:20:00",
            67.0,
            7.0,
            2,
        )
    }

    fn vj832() -> Arc<FlightRecord> {
        flight(
            "VJ832",
            "WTF",
            "REJ",
            "2021-09-02T11:05:00",
            "2021-09-02T12:45:00",
            31.0,
            5.0,
            1,
        )
    }

    #[test]
    fn new_trip_stands_at_origin() {
        let trip = Trip::new(code("BTW"), code("REJ"), 1);

        assert_eq!(trip.current_stop(), code("BTW"));
        assert_eq!(trip.stops(), &[code("BTW")]);
        assert_eq!(trip.flight_count(), 0);
        assert_eq!(trip.total_price(), 0.0);
        assert_eq!(trip.travel_secs(), 0);
        assert_eq!(trip.bags_allowed(), u32::MAX);
        assert!(trip.travel_time().is_none());
    }

    #[test]
    fn extend_accumulates_price_time_and_bags() {
        let trip = Trip::new(code("BTW"), code("REJ"), 1)
            .extended_with(&xc233())
            .extended_with(&vj832());

        assert_eq!(trip.stops(), &[code("BTW"), code("WTF"), code("REJ")]);
        assert_eq!(trip.total_price(), 67.0 + 7.0 + 31.0 + 5.0);
        // 2:30 flight + 2:45 layover + 1:40 flight
        assert_eq!(trip.travel_secs(), 6 * 3600 + 55 * 60);
        assert_eq!(trip.bags_allowed(), 1);
        assert!(trip.is_at(&code("REJ")));
        assert!(trip.has_visited(&code("WTF")));
        assert_eq!(trip.last_flight().unwrap().flight_no, "VJ832");
    }

    #[test]
    fn bag_fees_added_after_base_fare() {
        let first = flight(
            "F1",
            "AAA",
            "BBB",
            "2021-09-02T05:00:00",
            "2021-09-02T06:00:00",
            0.1,
            0.0,
            1,
        );
        let second = flight(
            "F2",
            "BBB",
            "CCC",
            "2021-09-02T08:00:00",
            "2021-09-02T09:00:00",
            0.2,
            0.3,
            1,
        );

        let trip = Trip::new(code("AAA"), code("CCC"), 1)
            .extended_with(&first)
            .extended_with(&second);

        // (0.1 + 0.2) + 0.3, not 0.1 + (0.2 + 0.3)
        assert_eq!(trip.total_price(), 0.1 + 0.2 + 0.3);
        assert_eq!(trip.total_price(), 0.6000000000000001);
    }

    #[test]
    fn extend_leaves_original_untouched() {
        let start = Trip::new(code("BTW"), code("REJ"), 0);
        let extended = start.extended_with(&xc233());

        assert_eq!(start.flight_count(), 0);
        assert_eq!(start.stops().len(), 1);
        assert_eq!(extended.flight_count(), 1);
    }

    #[test]
    fn extended_trips_share_flight_records() {
        let record = xc233();
        let trip = Trip::new(code("BTW"), code("REJ"), 0).extended_with(&record);

        assert!(Arc::ptr_eq(&trip.flights()[0], &record));
    }

    #[test]
    fn finalize_renders_travel_time() {
        let trip = Trip::new(code("BTW"), code("REJ"), 1)
            .extended_with(&xc233())
            .extended_with(&vj832())
            .finalize();

        assert_eq!(trip.travel_time().unwrap().to_string(), "6:55:00");
    }

    #[test]
    fn combined_sums_prices_and_keeps_outbound_time() {
        let there = Trip::new(code("BTW"), code("REJ"), 1)
            .extended_with(&xc233())
            .extended_with(&vj832())
            .finalize();
        let direct = flight(
            "JV042",
            "BTW",
            "REJ",
            "2021-09-01T17:35:00",
            "2021-09-01T21:05:00",
            216.0,
            11.0,
            2,
        );
        let back = Trip::new(code("BTW"), code("REJ"), 1)
            .extended_with(&direct)
            .finalize();

        let combined = there.combined_with(&back);

        let numbers: Vec<&str> = combined
            .flights()
            .iter()
            .map(|f| f.flight_no.as_str())
            .collect();
        assert_eq!(numbers, vec!["XC233", "VJ832", "JV042"]);
        assert_eq!(combined.total_price(), 110.0 + 227.0);
        assert_eq!(combined.bags_allowed(), 1);
        assert_eq!(combined.origin(), &code("BTW"));
        assert_eq!(combined.destination(), &code("REJ"));
        assert_eq!(combined.travel_time().unwrap().to_string(), "6:55:00");
    }
}
