//! Shared helpers for building tables and watching events.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use klondike_engine::{Card, GameEvent, Klondike, Layout, Pile, PileRef, Rank, Suit};

pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Build a full 52-card table.
///
/// `piles` are placed as given. Foundation `i` holds suit `Suit::ALL[i]`
/// from the Ace up to just below the lowest card of that suit named in
/// `piles`. Any card left over goes on top of the stock, face down.
pub fn table(piles: &[(PileRef, &[Card])]) -> Layout {
    let placed: Vec<Card> = piles.iter().flat_map(|(_, cards)| cards.iter().copied()).collect();
    let is_placed = |suit: Suit, rank: Rank| placed.iter().any(|c| c.suit == suit && c.rank == rank);

    let mut layout = Layout::empty();
    for (pile, cards) in piles {
        *layout.pile_mut(*pile).expect("valid pile") = Pile::from_cards(cards.iter().copied());
    }

    for (i, suit) in Suit::ALL.iter().copied().enumerate() {
        let mut on_foundation = true;
        for rank in Rank::ALL {
            if is_placed(suit, rank) {
                on_foundation = false;
                continue;
            }
            if on_foundation {
                layout.foundations[i].push(up(suit, rank));
            } else {
                layout.stock.push(down(suit, rank));
            }
        }
    }

    layout
        .check_invariants()
        .unwrap_or_else(|violation| panic!("bad test table: {violation}\n{layout}"));
    layout
}

/// Every card on the foundations except the four Kings, which sit alone
/// on tableaus 0 to 3.
pub fn kings_left() -> Layout {
    let kings: Vec<[Card; 1]> = Suit::ALL.iter().map(|&suit| [up(suit, Rank::King)]).collect();
    let piles: Vec<(PileRef, &[Card])> = kings
        .iter()
        .enumerate()
        .map(|(i, king)| (PileRef::Tableau(i), &king[..]))
        .collect();
    table(&piles)
}

/// A table on which neither the robot nor the hint finds anything, with an
/// empty stock and waste.
///
/// Q♥ and Q♠ are the only face-up cards and each covers the Jack its
/// foundation is waiting for.
pub fn deadlocked() -> Layout {
    table(&[
        (
            PileRef::Tableau(0),
            &[down(Suit::Spades, Rank::King), down(Suit::Spades, Rank::Jack), up(Suit::Hearts, Rank::Queen)],
        ),
        (
            PileRef::Tableau(1),
            &[down(Suit::Hearts, Rank::King), down(Suit::Hearts, Rank::Jack), up(Suit::Spades, Rank::Queen)],
        ),
    ])
}

/// Like [`deadlocked`], plus J♦ and Q♦ in the stock that fit nowhere the
/// robot looks. The 10♦ and K♦ they would need are buried face down.
pub fn stalling() -> Layout {
    table(&[
        (
            PileRef::Tableau(0),
            &[
                down(Suit::Diamonds, Rank::King),
                down(Suit::Diamonds, Rank::Ten),
                down(Suit::Spades, Rank::King),
                down(Suit::Spades, Rank::Jack),
                up(Suit::Hearts, Rank::Queen),
            ],
        ),
        (
            PileRef::Tableau(1),
            &[down(Suit::Hearts, Rank::King), down(Suit::Hearts, Rank::Jack), up(Suit::Spades, Rank::Queen)],
        ),
        (
            PileRef::Stock,
            &[down(Suit::Diamonds, Rank::Jack), down(Suit::Diamonds, Rank::Queen)],
        ),
    ])
}

/// Record every event the game emits.
pub fn record(game: &mut Klondike) -> Rc<RefCell<Vec<GameEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    game.subscribe_all(move |event| sink.borrow_mut().push(event.clone()));
    seen
}

pub fn count(events: &Rc<RefCell<Vec<GameEvent>>>, wanted: &GameEvent) -> usize {
    events.borrow().iter().filter(|event| *event == wanted).count()
}
