use day5::{decode, find_missing_id, Error};

#[test]
fn decode_puzzle_examples() {
    let cases = [
        ("FBFBBFFRLR", (44, 5), 357),
        ("BFFFBBFRRR", (70, 7), 567),
        ("FFFBBBFRRR", (14, 7), 119),
        ("BBFFBBFRLL", (102, 4), 820),
    ];
    for (code, coord, id) in cases {
        let seat = decode(code).unwrap();
        assert_eq!(seat.coord(), coord, "coordinate of {}", code);
        assert_eq!(seat.id(), id, "seat id of {}", code);
    }
}

#[test]
fn decode_extreme_seats() {
    let front_left = decode("FFFFFFFLLL").unwrap();
    assert_eq!(front_left.coord(), (0, 0));
    assert_eq!(front_left.id(), 0);

    let back_right = decode("BBBBBBBRRR").unwrap();
    assert_eq!(back_right.coord(), (127, 7));
    assert_eq!(back_right.id(), 1023);
}

#[test]
fn decoded_seats_stay_in_bounds() {
    // Every row pattern combined with every column pattern.
    for row_bits in 0..128usize {
        for col_bits in 0..8usize {
            let row_code = (0..7)
                .rev()
                .map(|b| if (row_bits >> b) & 1 == 1 { 'B' } else { 'F' });
            let col_code = (0..3)
                .rev()
                .map(|b| if (col_bits >> b) & 1 == 1 { 'R' } else { 'L' });
            let code = row_code.chain(col_code).collect::<String>();

            let seat = decode(&code).unwrap();
            assert_eq!(seat.coord(), (row_bits, col_bits));
            assert!(seat.row() <= 127 && seat.col() <= 7);
        }
    }
}

#[test]
fn decode_rejects_wrong_length() {
    assert_eq!(
        decode("FBFBBFFRL"),
        Err(Error::MalformedCode("FBFBBFFRL".to_string(), 9))
    );
    assert_eq!(
        decode("FBFBBFFRLRR"),
        Err(Error::MalformedCode("FBFBBFFRLRR".to_string(), 11))
    );
}

#[test]
fn decode_rejects_symbol_from_other_segment() {
    assert_eq!(
        decode("FBFBBFRRLR"),
        Err(Error::InvalidSymbol {
            symbol: 'R',
            pos: 6,
            lower: 'F',
            upper: 'B',
        })
    );
    assert_eq!(
        decode("FBFBBFFRBR"),
        Err(Error::InvalidSymbol {
            symbol: 'B',
            pos: 8,
            lower: 'L',
            upper: 'R',
        })
    );
}

#[test]
fn missing_id_between_neighbours() {
    let seat = 600;
    let mut ids = (seat - 40..seat).chain(seat + 1..seat + 25).collect::<Vec<_>>();
    ids.reverse();
    assert_eq!(find_missing_id(&ids), Ok(seat));
}

#[test]
fn missing_id_requires_a_gap() {
    let ids = (10..20).collect::<Vec<_>>();
    assert_eq!(find_missing_id(&ids), Err(Error::NoMissingSeat(10)));
    assert_eq!(find_missing_id(&[]), Err(Error::NoMissingSeat(0)));
}

#[test]
fn missing_id_rejects_several_gaps() {
    let ids = [10, 11, 13, 14, 16, 17];
    assert_eq!(
        find_missing_id(&ids),
        Err(Error::AmbiguousMissingSeat(12, 15))
    );
}

#[test]
fn missing_id_rejects_wide_or_duplicate_gaps() {
    assert_eq!(
        find_missing_id(&[3, 4, 8, 9]),
        Err(Error::NonContiguousSeats(4, 8))
    );
    assert_eq!(
        find_missing_id(&[3, 4, 4, 6]),
        Err(Error::NonContiguousSeats(4, 4))
    );
}
