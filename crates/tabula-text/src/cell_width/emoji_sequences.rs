// Generated from the Unicode emoji sequence data files. Do not edit.

/// Multi-codepoint emoji sequences that terminals draw as a single two-cell glyph.
#[rustfmt::skip]
pub(crate) static EMOJI_SEQUENCES: &[&[u32]] = &[
    &[0x261d, 0x1f3fb], &[0x261d, 0x1f3fc], &[0x261d, 0x1f3fd], &[0x261d, 0x1f3fe],
    &[0x261d, 0x1f3ff], &[0x26f9, 0xfe0f, 0x200d, 0x2640, 0xfe0f],
    &[0x26f9, 0xfe0f, 0x200d, 0x2642, 0xfe0f], &[0x26f9, 0x1f3fb],
    &[0x26f9, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x26f9, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x26f9, 0x1f3fc], &[0x26f9, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x26f9, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x26f9, 0x1f3fd],
    &[0x26f9, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x26f9, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x26f9, 0x1f3fe], &[0x26f9, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x26f9, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x26f9, 0x1f3ff],
    &[0x26f9, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x26f9, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x270a, 0x1f3fb], &[0x270a, 0x1f3fc], &[0x270a, 0x1f3fd], &[0x270a, 0x1f3fe],
    &[0x270a, 0x1f3ff], &[0x270b, 0x1f3fb], &[0x270b, 0x1f3fc], &[0x270b, 0x1f3fd],
    &[0x270b, 0x1f3fe], &[0x270b, 0x1f3ff], &[0x270c, 0x1f3fb], &[0x270c, 0x1f3fc],
    &[0x270c, 0x1f3fd], &[0x270c, 0x1f3fe], &[0x270c, 0x1f3ff], &[0x270d, 0x1f3fb],
    &[0x270d, 0x1f3fc], &[0x270d, 0x1f3fd], &[0x270d, 0x1f3fe], &[0x270d, 0x1f3ff],
    &[0x2764, 0xfe0f, 0x200d, 0x1f525], &[0x2764, 0xfe0f, 0x200d, 0x1fa79], &[0x1f385, 0x1f3fb],
    &[0x1f385, 0x1f3fc], &[0x1f385, 0x1f3fd], &[0x1f385, 0x1f3fe], &[0x1f385, 0x1f3ff],
    &[0x1f3c2, 0x1f3fb], &[0x1f3c2, 0x1f3fc], &[0x1f3c2, 0x1f3fd], &[0x1f3c2, 0x1f3fe],
    &[0x1f3c2, 0x1f3ff], &[0x1f3c3, 0x200d, 0x2640, 0xfe0f], &[0x1f3c3, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3c3, 0x1f3fb], &[0x1f3c3, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3c3, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f3c3, 0x1f3fc],
    &[0x1f3c3, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f3c3, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3c3, 0x1f3fd], &[0x1f3c3, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3c3, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f3c3, 0x1f3fe],
    &[0x1f3c3, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f3c3, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3c3, 0x1f3ff], &[0x1f3c3, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3c3, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f3c4, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3c4, 0x200d, 0x2642, 0xfe0f], &[0x1f3c4, 0x1f3fb],
    &[0x1f3c4, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f3c4, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3c4, 0x1f3fc], &[0x1f3c4, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3c4, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f3c4, 0x1f3fd],
    &[0x1f3c4, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f3c4, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3c4, 0x1f3fe], &[0x1f3c4, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3c4, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f3c4, 0x1f3ff],
    &[0x1f3c4, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f3c4, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3c7, 0x1f3fb], &[0x1f3c7, 0x1f3fc], &[0x1f3c7, 0x1f3fd], &[0x1f3c7, 0x1f3fe],
    &[0x1f3c7, 0x1f3ff], &[0x1f3ca, 0x200d, 0x2640, 0xfe0f], &[0x1f3ca, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3ca, 0x1f3fb], &[0x1f3ca, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3ca, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f3ca, 0x1f3fc],
    &[0x1f3ca, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f3ca, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3ca, 0x1f3fd], &[0x1f3ca, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3ca, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f3ca, 0x1f3fe],
    &[0x1f3ca, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f3ca, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3ca, 0x1f3ff], &[0x1f3ca, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3ca, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f3cb, 0xfe0f, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3cb, 0xfe0f, 0x200d, 0x2642, 0xfe0f], &[0x1f3cb, 0x1f3fb],
    &[0x1f3cb, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f3cb, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3cb, 0x1f3fc], &[0x1f3cb, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3cb, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f3cb, 0x1f3fd],
    &[0x1f3cb, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f3cb, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3cb, 0x1f3fe], &[0x1f3cb, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3cb, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f3cb, 0x1f3ff],
    &[0x1f3cb, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f3cb, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3cc, 0xfe0f, 0x200d, 0x2640, 0xfe0f], &[0x1f3cc, 0xfe0f, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3cc, 0x1f3fb], &[0x1f3cc, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3cc, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f3cc, 0x1f3fc],
    &[0x1f3cc, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f3cc, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3cc, 0x1f3fd], &[0x1f3cc, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3cc, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f3cc, 0x1f3fe],
    &[0x1f3cc, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f3cc, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f3cc, 0x1f3ff], &[0x1f3cc, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f3cc, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f3f3, 0xfe0f, 0x200d, 0x26a7, 0xfe0f],
    &[0x1f3f3, 0xfe0f, 0x200d, 0x1f308], &[0x1f3f4, 0x200d, 0x2620, 0xfe0f],
    &[0x1f408, 0x200d, 0x2b1b], &[0x1f415, 0x200d, 0x1f9ba], &[0x1f43b, 0x200d, 0x2744, 0xfe0f],
    &[0x1f441, 0xfe0f, 0x200d, 0x1f5e8, 0xfe0f], &[0x1f442, 0x1f3fb], &[0x1f442, 0x1f3fc],
    &[0x1f442, 0x1f3fd], &[0x1f442, 0x1f3fe], &[0x1f442, 0x1f3ff], &[0x1f443, 0x1f3fb],
    &[0x1f443, 0x1f3fc], &[0x1f443, 0x1f3fd], &[0x1f443, 0x1f3fe], &[0x1f443, 0x1f3ff],
    &[0x1f446, 0x1f3fb], &[0x1f446, 0x1f3fc], &[0x1f446, 0x1f3fd], &[0x1f446, 0x1f3fe],
    &[0x1f446, 0x1f3ff], &[0x1f447, 0x1f3fb], &[0x1f447, 0x1f3fc], &[0x1f447, 0x1f3fd],
    &[0x1f447, 0x1f3fe], &[0x1f447, 0x1f3ff], &[0x1f448, 0x1f3fb], &[0x1f448, 0x1f3fc],
    &[0x1f448, 0x1f3fd], &[0x1f448, 0x1f3fe], &[0x1f448, 0x1f3ff], &[0x1f449, 0x1f3fb],
    &[0x1f449, 0x1f3fc], &[0x1f449, 0x1f3fd], &[0x1f449, 0x1f3fe], &[0x1f449, 0x1f3ff],
    &[0x1f44a, 0x1f3fb], &[0x1f44a, 0x1f3fc], &[0x1f44a, 0x1f3fd], &[0x1f44a, 0x1f3fe],
    &[0x1f44a, 0x1f3ff], &[0x1f44b, 0x1f3fb], &[0x1f44b, 0x1f3fc], &[0x1f44b, 0x1f3fd],
    &[0x1f44b, 0x1f3fe], &[0x1f44b, 0x1f3ff], &[0x1f44c, 0x1f3fb], &[0x1f44c, 0x1f3fc],
    &[0x1f44c, 0x1f3fd], &[0x1f44c, 0x1f3fe], &[0x1f44c, 0x1f3ff], &[0x1f44d, 0x1f3fb],
    &[0x1f44d, 0x1f3fc], &[0x1f44d, 0x1f3fd], &[0x1f44d, 0x1f3fe], &[0x1f44d, 0x1f3ff],
    &[0x1f44e, 0x1f3fb], &[0x1f44e, 0x1f3fc], &[0x1f44e, 0x1f3fd], &[0x1f44e, 0x1f3fe],
    &[0x1f44e, 0x1f3ff], &[0x1f44f, 0x1f3fb], &[0x1f44f, 0x1f3fc], &[0x1f44f, 0x1f3fd],
    &[0x1f44f, 0x1f3fe], &[0x1f44f, 0x1f3ff], &[0x1f450, 0x1f3fb], &[0x1f450, 0x1f3fc],
    &[0x1f450, 0x1f3fd], &[0x1f450, 0x1f3fe], &[0x1f450, 0x1f3ff], &[0x1f466, 0x1f3fb],
    &[0x1f466, 0x1f3fc], &[0x1f466, 0x1f3fd], &[0x1f466, 0x1f3fe], &[0x1f466, 0x1f3ff],
    &[0x1f467, 0x1f3fb], &[0x1f467, 0x1f3fc], &[0x1f467, 0x1f3fd], &[0x1f467, 0x1f3fe],
    &[0x1f467, 0x1f3ff], &[0x1f468, 0x200d, 0x2695, 0xfe0f], &[0x1f468, 0x200d, 0x2696, 0xfe0f],
    &[0x1f468, 0x200d, 0x2708, 0xfe0f], &[0x1f468, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468],
    &[0x1f468, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f48b, 0x200d, 0x1f468],
    &[0x1f468, 0x200d, 0x1f33e], &[0x1f468, 0x200d, 0x1f373], &[0x1f468, 0x200d, 0x1f37c],
    &[0x1f468, 0x200d, 0x1f393], &[0x1f468, 0x200d, 0x1f3a4], &[0x1f468, 0x200d, 0x1f3a8],
    &[0x1f468, 0x200d, 0x1f3eb], &[0x1f468, 0x200d, 0x1f3ed], &[0x1f468, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f466, 0x200d, 0x1f466], &[0x1f468, 0x200d, 0x1f467],
    &[0x1f468, 0x200d, 0x1f467, 0x200d, 0x1f466], &[0x1f468, 0x200d, 0x1f467, 0x200d, 0x1f467],
    &[0x1f468, 0x200d, 0x1f468, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f468, 0x200d, 0x1f466, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f468, 0x200d, 0x1f467],
    &[0x1f468, 0x200d, 0x1f468, 0x200d, 0x1f467, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f468, 0x200d, 0x1f467, 0x200d, 0x1f467],
    &[0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f466, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f467],
    &[0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f467, 0x200d, 0x1f466],
    &[0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f467, 0x200d, 0x1f467], &[0x1f468, 0x200d, 0x1f4bb],
    &[0x1f468, 0x200d, 0x1f4bc], &[0x1f468, 0x200d, 0x1f527], &[0x1f468, 0x200d, 0x1f52c],
    &[0x1f468, 0x200d, 0x1f680], &[0x1f468, 0x200d, 0x1f692], &[0x1f468, 0x200d, 0x1f9af],
    &[0x1f468, 0x200d, 0x1f9b0], &[0x1f468, 0x200d, 0x1f9b1], &[0x1f468, 0x200d, 0x1f9b2],
    &[0x1f468, 0x200d, 0x1f9b3], &[0x1f468, 0x200d, 0x1f9bc], &[0x1f468, 0x200d, 0x1f9bd],
    &[0x1f468, 0x1f3fb], &[0x1f468, 0x1f3fb, 0x200d, 0x2695, 0xfe0f],
    &[0x1f468, 0x1f3fb, 0x200d, 0x2696, 0xfe0f], &[0x1f468, 0x1f3fb, 0x200d, 0x2708, 0xfe0f],
    &[0x1f468, 0x1f3fb, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3fb, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3fb, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f33e], &[0x1f468, 0x1f3fb, 0x200d, 0x1f373],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f37c], &[0x1f468, 0x1f3fb, 0x200d, 0x1f393],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f3a4], &[0x1f468, 0x1f3fb, 0x200d, 0x1f3a8],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f3eb], &[0x1f468, 0x1f3fb, 0x200d, 0x1f3ed],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f4bb], &[0x1f468, 0x1f3fb, 0x200d, 0x1f4bc],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f527], &[0x1f468, 0x1f3fb, 0x200d, 0x1f52c],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f680], &[0x1f468, 0x1f3fb, 0x200d, 0x1f692],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fc],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fe],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f9af], &[0x1f468, 0x1f3fb, 0x200d, 0x1f9b0],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f9b1], &[0x1f468, 0x1f3fb, 0x200d, 0x1f9b2],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f9b3], &[0x1f468, 0x1f3fb, 0x200d, 0x1f9bc],
    &[0x1f468, 0x1f3fb, 0x200d, 0x1f9bd], &[0x1f468, 0x1f3fc],
    &[0x1f468, 0x1f3fc, 0x200d, 0x2695, 0xfe0f], &[0x1f468, 0x1f3fc, 0x200d, 0x2696, 0xfe0f],
    &[0x1f468, 0x1f3fc, 0x200d, 0x2708, 0xfe0f],
    &[0x1f468, 0x1f3fc, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fc],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f33e], &[0x1f468, 0x1f3fc, 0x200d, 0x1f373],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f37c], &[0x1f468, 0x1f3fc, 0x200d, 0x1f393],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f3a4], &[0x1f468, 0x1f3fc, 0x200d, 0x1f3a8],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f3eb], &[0x1f468, 0x1f3fc, 0x200d, 0x1f3ed],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f4bb], &[0x1f468, 0x1f3fc, 0x200d, 0x1f4bc],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f527], &[0x1f468, 0x1f3fc, 0x200d, 0x1f52c],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f680], &[0x1f468, 0x1f3fc, 0x200d, 0x1f692],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f9af], &[0x1f468, 0x1f3fc, 0x200d, 0x1f9b0],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f9b1], &[0x1f468, 0x1f3fc, 0x200d, 0x1f9b2],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f9b3], &[0x1f468, 0x1f3fc, 0x200d, 0x1f9bc],
    &[0x1f468, 0x1f3fc, 0x200d, 0x1f9bd], &[0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3fd, 0x200d, 0x2695, 0xfe0f], &[0x1f468, 0x1f3fd, 0x200d, 0x2696, 0xfe0f],
    &[0x1f468, 0x1f3fd, 0x200d, 0x2708, 0xfe0f],
    &[0x1f468, 0x1f3fd, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3fd, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3fd, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f33e], &[0x1f468, 0x1f3fd, 0x200d, 0x1f373],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f37c], &[0x1f468, 0x1f3fd, 0x200d, 0x1f393],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f3a4], &[0x1f468, 0x1f3fd, 0x200d, 0x1f3a8],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f3eb], &[0x1f468, 0x1f3fd, 0x200d, 0x1f3ed],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f4bb], &[0x1f468, 0x1f3fd, 0x200d, 0x1f4bc],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f527], &[0x1f468, 0x1f3fd, 0x200d, 0x1f52c],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f680], &[0x1f468, 0x1f3fd, 0x200d, 0x1f692],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fc],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fe],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f9af], &[0x1f468, 0x1f3fd, 0x200d, 0x1f9b0],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f9b1], &[0x1f468, 0x1f3fd, 0x200d, 0x1f9b2],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f9b3], &[0x1f468, 0x1f3fd, 0x200d, 0x1f9bc],
    &[0x1f468, 0x1f3fd, 0x200d, 0x1f9bd], &[0x1f468, 0x1f3fe],
    &[0x1f468, 0x1f3fe, 0x200d, 0x2695, 0xfe0f], &[0x1f468, 0x1f3fe, 0x200d, 0x2696, 0xfe0f],
    &[0x1f468, 0x1f3fe, 0x200d, 0x2708, 0xfe0f],
    &[0x1f468, 0x1f3fe, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fe],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f33e], &[0x1f468, 0x1f3fe, 0x200d, 0x1f373],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f37c], &[0x1f468, 0x1f3fe, 0x200d, 0x1f393],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f3a4], &[0x1f468, 0x1f3fe, 0x200d, 0x1f3a8],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f3eb], &[0x1f468, 0x1f3fe, 0x200d, 0x1f3ed],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f4bb], &[0x1f468, 0x1f3fe, 0x200d, 0x1f4bc],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f527], &[0x1f468, 0x1f3fe, 0x200d, 0x1f52c],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f680], &[0x1f468, 0x1f3fe, 0x200d, 0x1f692],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f9af], &[0x1f468, 0x1f3fe, 0x200d, 0x1f9b0],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f9b1], &[0x1f468, 0x1f3fe, 0x200d, 0x1f9b2],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f9b3], &[0x1f468, 0x1f3fe, 0x200d, 0x1f9bc],
    &[0x1f468, 0x1f3fe, 0x200d, 0x1f9bd], &[0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3ff, 0x200d, 0x2695, 0xfe0f], &[0x1f468, 0x1f3ff, 0x200d, 0x2696, 0xfe0f],
    &[0x1f468, 0x1f3ff, 0x200d, 0x2708, 0xfe0f],
    &[0x1f468, 0x1f3ff, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3ff, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3ff, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f33e], &[0x1f468, 0x1f3ff, 0x200d, 0x1f373],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f37c], &[0x1f468, 0x1f3ff, 0x200d, 0x1f393],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f3a4], &[0x1f468, 0x1f3ff, 0x200d, 0x1f3a8],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f3eb], &[0x1f468, 0x1f3ff, 0x200d, 0x1f3ed],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f4bb], &[0x1f468, 0x1f3ff, 0x200d, 0x1f4bc],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f527], &[0x1f468, 0x1f3ff, 0x200d, 0x1f52c],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f680], &[0x1f468, 0x1f3ff, 0x200d, 0x1f692],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fc],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fe],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f9af], &[0x1f468, 0x1f3ff, 0x200d, 0x1f9b0],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f9b1], &[0x1f468, 0x1f3ff, 0x200d, 0x1f9b2],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f9b3], &[0x1f468, 0x1f3ff, 0x200d, 0x1f9bc],
    &[0x1f468, 0x1f3ff, 0x200d, 0x1f9bd], &[0x1f469, 0x200d, 0x2695, 0xfe0f],
    &[0x1f469, 0x200d, 0x2696, 0xfe0f], &[0x1f469, 0x200d, 0x2708, 0xfe0f],
    &[0x1f469, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468],
    &[0x1f469, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f469],
    &[0x1f469, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f48b, 0x200d, 0x1f468],
    &[0x1f469, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f48b, 0x200d, 0x1f469],
    &[0x1f469, 0x200d, 0x1f33e], &[0x1f469, 0x200d, 0x1f373], &[0x1f469, 0x200d, 0x1f37c],
    &[0x1f469, 0x200d, 0x1f393], &[0x1f469, 0x200d, 0x1f3a4], &[0x1f469, 0x200d, 0x1f3a8],
    &[0x1f469, 0x200d, 0x1f3eb], &[0x1f469, 0x200d, 0x1f3ed], &[0x1f469, 0x200d, 0x1f466],
    &[0x1f469, 0x200d, 0x1f466, 0x200d, 0x1f466], &[0x1f469, 0x200d, 0x1f467],
    &[0x1f469, 0x200d, 0x1f467, 0x200d, 0x1f466], &[0x1f469, 0x200d, 0x1f467, 0x200d, 0x1f467],
    &[0x1f469, 0x200d, 0x1f469, 0x200d, 0x1f466],
    &[0x1f469, 0x200d, 0x1f469, 0x200d, 0x1f466, 0x200d, 0x1f466],
    &[0x1f469, 0x200d, 0x1f469, 0x200d, 0x1f467],
    &[0x1f469, 0x200d, 0x1f469, 0x200d, 0x1f467, 0x200d, 0x1f466],
    &[0x1f469, 0x200d, 0x1f469, 0x200d, 0x1f467, 0x200d, 0x1f467], &[0x1f469, 0x200d, 0x1f4bb],
    &[0x1f469, 0x200d, 0x1f4bc], &[0x1f469, 0x200d, 0x1f527], &[0x1f469, 0x200d, 0x1f52c],
    &[0x1f469, 0x200d, 0x1f680], &[0x1f469, 0x200d, 0x1f692], &[0x1f469, 0x200d, 0x1f9af],
    &[0x1f469, 0x200d, 0x1f9b0], &[0x1f469, 0x200d, 0x1f9b1], &[0x1f469, 0x200d, 0x1f9b2],
    &[0x1f469, 0x200d, 0x1f9b3], &[0x1f469, 0x200d, 0x1f9bc], &[0x1f469, 0x200d, 0x1f9bd],
    &[0x1f469, 0x1f3fb], &[0x1f469, 0x1f3fb, 0x200d, 0x2695, 0xfe0f],
    &[0x1f469, 0x1f3fb, 0x200d, 0x2696, 0xfe0f], &[0x1f469, 0x1f3fb, 0x200d, 0x2708, 0xfe0f],
    &[0x1f469, 0x1f3fb, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f469, 0x1f3fb, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f469, 0x1f3fb, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f469, 0x1f3fb],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f33e], &[0x1f469, 0x1f3fb, 0x200d, 0x1f373],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f37c], &[0x1f469, 0x1f3fb, 0x200d, 0x1f393],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f3a4], &[0x1f469, 0x1f3fb, 0x200d, 0x1f3a8],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f3eb], &[0x1f469, 0x1f3fb, 0x200d, 0x1f3ed],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f4bb], &[0x1f469, 0x1f3fb, 0x200d, 0x1f4bc],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f527], &[0x1f469, 0x1f3fb, 0x200d, 0x1f52c],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f680], &[0x1f469, 0x1f3fb, 0x200d, 0x1f692],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fc],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fd],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fe],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3ff],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f9af], &[0x1f469, 0x1f3fb, 0x200d, 0x1f9b0],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f9b1], &[0x1f469, 0x1f3fb, 0x200d, 0x1f9b2],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f9b3], &[0x1f469, 0x1f3fb, 0x200d, 0x1f9bc],
    &[0x1f469, 0x1f3fb, 0x200d, 0x1f9bd], &[0x1f469, 0x1f3fc],
    &[0x1f469, 0x1f3fc, 0x200d, 0x2695, 0xfe0f], &[0x1f469, 0x1f3fc, 0x200d, 0x2696, 0xfe0f],
    &[0x1f469, 0x1f3fc, 0x200d, 0x2708, 0xfe0f],
    &[0x1f469, 0x1f3fc, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fc],
    &[0x1f469, 0x1f3fc, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f469, 0x1f3fc],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f33e], &[0x1f469, 0x1f3fc, 0x200d, 0x1f373],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f37c], &[0x1f469, 0x1f3fc, 0x200d, 0x1f393],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f3a4], &[0x1f469, 0x1f3fc, 0x200d, 0x1f3a8],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f3eb], &[0x1f469, 0x1f3fc, 0x200d, 0x1f3ed],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f4bb], &[0x1f469, 0x1f3fc, 0x200d, 0x1f4bc],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f527], &[0x1f469, 0x1f3fc, 0x200d, 0x1f52c],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f680], &[0x1f469, 0x1f3fc, 0x200d, 0x1f692],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fb],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fd],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3ff],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f9af], &[0x1f469, 0x1f3fc, 0x200d, 0x1f9b0],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f9b1], &[0x1f469, 0x1f3fc, 0x200d, 0x1f9b2],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f9b3], &[0x1f469, 0x1f3fc, 0x200d, 0x1f9bc],
    &[0x1f469, 0x1f3fc, 0x200d, 0x1f9bd], &[0x1f469, 0x1f3fd],
    &[0x1f469, 0x1f3fd, 0x200d, 0x2695, 0xfe0f], &[0x1f469, 0x1f3fd, 0x200d, 0x2696, 0xfe0f],
    &[0x1f469, 0x1f3fd, 0x200d, 0x2708, 0xfe0f],
    &[0x1f469, 0x1f3fd, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f469, 0x1f3fd, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f469, 0x1f3fd],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f33e], &[0x1f469, 0x1f3fd, 0x200d, 0x1f373],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f37c], &[0x1f469, 0x1f3fd, 0x200d, 0x1f393],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f3a4], &[0x1f469, 0x1f3fd, 0x200d, 0x1f3a8],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f3eb], &[0x1f469, 0x1f3fd, 0x200d, 0x1f3ed],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f4bb], &[0x1f469, 0x1f3fd, 0x200d, 0x1f4bc],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f527], &[0x1f469, 0x1f3fd, 0x200d, 0x1f52c],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f680], &[0x1f469, 0x1f3fd, 0x200d, 0x1f692],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fb],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fc],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fe],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3ff],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f9af], &[0x1f469, 0x1f3fd, 0x200d, 0x1f9b0],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f9b1], &[0x1f469, 0x1f3fd, 0x200d, 0x1f9b2],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f9b3], &[0x1f469, 0x1f3fd, 0x200d, 0x1f9bc],
    &[0x1f469, 0x1f3fd, 0x200d, 0x1f9bd], &[0x1f469, 0x1f3fe],
    &[0x1f469, 0x1f3fe, 0x200d, 0x2695, 0xfe0f], &[0x1f469, 0x1f3fe, 0x200d, 0x2696, 0xfe0f],
    &[0x1f469, 0x1f3fe, 0x200d, 0x2708, 0xfe0f],
    &[0x1f469, 0x1f3fe, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fe],
    &[0x1f469, 0x1f3fe, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f469, 0x1f3fe],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f33e], &[0x1f469, 0x1f3fe, 0x200d, 0x1f373],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f37c], &[0x1f469, 0x1f3fe, 0x200d, 0x1f393],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f3a4], &[0x1f469, 0x1f3fe, 0x200d, 0x1f3a8],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f3eb], &[0x1f469, 0x1f3fe, 0x200d, 0x1f3ed],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f4bb], &[0x1f469, 0x1f3fe, 0x200d, 0x1f4bc],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f527], &[0x1f469, 0x1f3fe, 0x200d, 0x1f52c],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f680], &[0x1f469, 0x1f3fe, 0x200d, 0x1f692],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fb],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fd],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3ff],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f9af], &[0x1f469, 0x1f3fe, 0x200d, 0x1f9b0],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f9b1], &[0x1f469, 0x1f3fe, 0x200d, 0x1f9b2],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f9b3], &[0x1f469, 0x1f3fe, 0x200d, 0x1f9bc],
    &[0x1f469, 0x1f3fe, 0x200d, 0x1f9bd], &[0x1f469, 0x1f3ff],
    &[0x1f469, 0x1f3ff, 0x200d, 0x2695, 0xfe0f], &[0x1f469, 0x1f3ff, 0x200d, 0x2696, 0xfe0f],
    &[0x1f469, 0x1f3ff, 0x200d, 0x2708, 0xfe0f],
    &[0x1f469, 0x1f3ff, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f469, 0x1f3ff, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f468, 0x1f3ff],
    &[0x1f469, 0x1f3ff, 0x200d, 0x2764, 0xfe0f, 0x200d, 0x1f469, 0x1f3ff],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f33e], &[0x1f469, 0x1f3ff, 0x200d, 0x1f373],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f37c], &[0x1f469, 0x1f3ff, 0x200d, 0x1f393],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f3a4], &[0x1f469, 0x1f3ff, 0x200d, 0x1f3a8],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f3eb], &[0x1f469, 0x1f3ff, 0x200d, 0x1f3ed],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f4bb], &[0x1f469, 0x1f3ff, 0x200d, 0x1f4bc],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f527], &[0x1f469, 0x1f3ff, 0x200d, 0x1f52c],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f680], &[0x1f469, 0x1f3ff, 0x200d, 0x1f692],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fb],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3fd],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fb],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fc],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fd],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f469, 0x1f3fe],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f9af], &[0x1f469, 0x1f3ff, 0x200d, 0x1f9b0],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f9b1], &[0x1f469, 0x1f3ff, 0x200d, 0x1f9b2],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f9b3], &[0x1f469, 0x1f3ff, 0x200d, 0x1f9bc],
    &[0x1f469, 0x1f3ff, 0x200d, 0x1f9bd], &[0x1f46b, 0x1f3fb], &[0x1f46b, 0x1f3fc],
    &[0x1f46b, 0x1f3fd], &[0x1f46b, 0x1f3fe], &[0x1f46b, 0x1f3ff], &[0x1f46c, 0x1f3fb],
    &[0x1f46c, 0x1f3fc], &[0x1f46c, 0x1f3fd], &[0x1f46c, 0x1f3fe], &[0x1f46c, 0x1f3ff],
    &[0x1f46d, 0x1f3fb], &[0x1f46d, 0x1f3fc], &[0x1f46d, 0x1f3fd], &[0x1f46d, 0x1f3fe],
    &[0x1f46d, 0x1f3ff], &[0x1f46e, 0x200d, 0x2640, 0xfe0f], &[0x1f46e, 0x200d, 0x2642, 0xfe0f],
    &[0x1f46e, 0x1f3fb], &[0x1f46e, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f46e, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f46e, 0x1f3fc],
    &[0x1f46e, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f46e, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f46e, 0x1f3fd], &[0x1f46e, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f46e, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f46e, 0x1f3fe],
    &[0x1f46e, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f46e, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f46e, 0x1f3ff], &[0x1f46e, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f46e, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f46f, 0x200d, 0x2640, 0xfe0f],
    &[0x1f46f, 0x200d, 0x2642, 0xfe0f], &[0x1f470, 0x200d, 0x2640, 0xfe0f],
    &[0x1f470, 0x200d, 0x2642, 0xfe0f], &[0x1f470, 0x1f3fb],
    &[0x1f470, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f470, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f470, 0x1f3fc], &[0x1f470, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f470, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f470, 0x1f3fd],
    &[0x1f470, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f470, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f470, 0x1f3fe], &[0x1f470, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f470, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f470, 0x1f3ff],
    &[0x1f470, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f470, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f471, 0x200d, 0x2640, 0xfe0f], &[0x1f471, 0x200d, 0x2642, 0xfe0f], &[0x1f471, 0x1f3fb],
    &[0x1f471, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f471, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f471, 0x1f3fc], &[0x1f471, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f471, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f471, 0x1f3fd],
    &[0x1f471, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f471, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f471, 0x1f3fe], &[0x1f471, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f471, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f471, 0x1f3ff],
    &[0x1f471, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f471, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f472, 0x1f3fb], &[0x1f472, 0x1f3fc], &[0x1f472, 0x1f3fd], &[0x1f472, 0x1f3fe],
    &[0x1f472, 0x1f3ff], &[0x1f473, 0x200d, 0x2640, 0xfe0f], &[0x1f473, 0x200d, 0x2642, 0xfe0f],
    &[0x1f473, 0x1f3fb], &[0x1f473, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f473, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f473, 0x1f3fc],
    &[0x1f473, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f473, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f473, 0x1f3fd], &[0x1f473, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f473, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f473, 0x1f3fe],
    &[0x1f473, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f473, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f473, 0x1f3ff], &[0x1f473, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f473, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f474, 0x1f3fb], &[0x1f474, 0x1f3fc],
    &[0x1f474, 0x1f3fd], &[0x1f474, 0x1f3fe], &[0x1f474, 0x1f3ff], &[0x1f475, 0x1f3fb],
    &[0x1f475, 0x1f3fc], &[0x1f475, 0x1f3fd], &[0x1f475, 0x1f3fe], &[0x1f475, 0x1f3ff],
    &[0x1f476, 0x1f3fb], &[0x1f476, 0x1f3fc], &[0x1f476, 0x1f3fd], &[0x1f476, 0x1f3fe],
    &[0x1f476, 0x1f3ff], &[0x1f477, 0x200d, 0x2640, 0xfe0f], &[0x1f477, 0x200d, 0x2642, 0xfe0f],
    &[0x1f477, 0x1f3fb], &[0x1f477, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f477, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f477, 0x1f3fc],
    &[0x1f477, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f477, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f477, 0x1f3fd], &[0x1f477, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f477, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f477, 0x1f3fe],
    &[0x1f477, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f477, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f477, 0x1f3ff], &[0x1f477, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f477, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f478, 0x1f3fb], &[0x1f478, 0x1f3fc],
    &[0x1f478, 0x1f3fd], &[0x1f478, 0x1f3fe], &[0x1f478, 0x1f3ff], &[0x1f47c, 0x1f3fb],
    &[0x1f47c, 0x1f3fc], &[0x1f47c, 0x1f3fd], &[0x1f47c, 0x1f3fe], &[0x1f47c, 0x1f3ff],
    &[0x1f481, 0x200d, 0x2640, 0xfe0f], &[0x1f481, 0x200d, 0x2642, 0xfe0f], &[0x1f481, 0x1f3fb],
    &[0x1f481, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f481, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f481, 0x1f3fc], &[0x1f481, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f481, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f481, 0x1f3fd],
    &[0x1f481, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f481, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f481, 0x1f3fe], &[0x1f481, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f481, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f481, 0x1f3ff],
    &[0x1f481, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f481, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f482, 0x200d, 0x2640, 0xfe0f], &[0x1f482, 0x200d, 0x2642, 0xfe0f], &[0x1f482, 0x1f3fb],
    &[0x1f482, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f482, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f482, 0x1f3fc], &[0x1f482, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f482, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f482, 0x1f3fd],
    &[0x1f482, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f482, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f482, 0x1f3fe], &[0x1f482, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f482, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f482, 0x1f3ff],
    &[0x1f482, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f482, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f483, 0x1f3fb], &[0x1f483, 0x1f3fc], &[0x1f483, 0x1f3fd], &[0x1f483, 0x1f3fe],
    &[0x1f483, 0x1f3ff], &[0x1f485, 0x1f3fb], &[0x1f485, 0x1f3fc], &[0x1f485, 0x1f3fd],
    &[0x1f485, 0x1f3fe], &[0x1f485, 0x1f3ff], &[0x1f486, 0x200d, 0x2640, 0xfe0f],
    &[0x1f486, 0x200d, 0x2642, 0xfe0f], &[0x1f486, 0x1f3fb],
    &[0x1f486, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f486, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f486, 0x1f3fc], &[0x1f486, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f486, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f486, 0x1f3fd],
    &[0x1f486, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f486, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f486, 0x1f3fe], &[0x1f486, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f486, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f486, 0x1f3ff],
    &[0x1f486, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f486, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f487, 0x200d, 0x2640, 0xfe0f], &[0x1f487, 0x200d, 0x2642, 0xfe0f], &[0x1f487, 0x1f3fb],
    &[0x1f487, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f487, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f487, 0x1f3fc], &[0x1f487, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f487, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f487, 0x1f3fd],
    &[0x1f487, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f487, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f487, 0x1f3fe], &[0x1f487, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f487, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f487, 0x1f3ff],
    &[0x1f487, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f487, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f48f, 0x1f3fb], &[0x1f48f, 0x1f3fc], &[0x1f48f, 0x1f3fd], &[0x1f48f, 0x1f3fe],
    &[0x1f48f, 0x1f3ff], &[0x1f491, 0x1f3fb], &[0x1f491, 0x1f3fc], &[0x1f491, 0x1f3fd],
    &[0x1f491, 0x1f3fe], &[0x1f491, 0x1f3ff], &[0x1f4aa, 0x1f3fb], &[0x1f4aa, 0x1f3fc],
    &[0x1f4aa, 0x1f3fd], &[0x1f4aa, 0x1f3fe], &[0x1f4aa, 0x1f3ff], &[0x1f574, 0x1f3fb],
    &[0x1f574, 0x1f3fc], &[0x1f574, 0x1f3fd], &[0x1f574, 0x1f3fe], &[0x1f574, 0x1f3ff],
    &[0x1f575, 0xfe0f, 0x200d, 0x2640, 0xfe0f], &[0x1f575, 0xfe0f, 0x200d, 0x2642, 0xfe0f],
    &[0x1f575, 0x1f3fb], &[0x1f575, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f575, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f575, 0x1f3fc],
    &[0x1f575, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f575, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f575, 0x1f3fd], &[0x1f575, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f575, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f575, 0x1f3fe],
    &[0x1f575, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f575, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f575, 0x1f3ff], &[0x1f575, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f575, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f57a, 0x1f3fb], &[0x1f57a, 0x1f3fc],
    &[0x1f57a, 0x1f3fd], &[0x1f57a, 0x1f3fe], &[0x1f57a, 0x1f3ff], &[0x1f590, 0x1f3fb],
    &[0x1f590, 0x1f3fc], &[0x1f590, 0x1f3fd], &[0x1f590, 0x1f3fe], &[0x1f590, 0x1f3ff],
    &[0x1f595, 0x1f3fb], &[0x1f595, 0x1f3fc], &[0x1f595, 0x1f3fd], &[0x1f595, 0x1f3fe],
    &[0x1f595, 0x1f3ff], &[0x1f596, 0x1f3fb], &[0x1f596, 0x1f3fc], &[0x1f596, 0x1f3fd],
    &[0x1f596, 0x1f3fe], &[0x1f596, 0x1f3ff], &[0x1f62e, 0x200d, 0x1f4a8],
    &[0x1f635, 0x200d, 0x1f4ab], &[0x1f636, 0x200d, 0x1f32b, 0xfe0f],
    &[0x1f645, 0x200d, 0x2640, 0xfe0f], &[0x1f645, 0x200d, 0x2642, 0xfe0f], &[0x1f645, 0x1f3fb],
    &[0x1f645, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f645, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f645, 0x1f3fc], &[0x1f645, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f645, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f645, 0x1f3fd],
    &[0x1f645, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f645, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f645, 0x1f3fe], &[0x1f645, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f645, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f645, 0x1f3ff],
    &[0x1f645, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f645, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f646, 0x200d, 0x2640, 0xfe0f], &[0x1f646, 0x200d, 0x2642, 0xfe0f], &[0x1f646, 0x1f3fb],
    &[0x1f646, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f646, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f646, 0x1f3fc], &[0x1f646, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f646, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f646, 0x1f3fd],
    &[0x1f646, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f646, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f646, 0x1f3fe], &[0x1f646, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f646, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f646, 0x1f3ff],
    &[0x1f646, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f646, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f647, 0x200d, 0x2640, 0xfe0f], &[0x1f647, 0x200d, 0x2642, 0xfe0f], &[0x1f647, 0x1f3fb],
    &[0x1f647, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f647, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f647, 0x1f3fc], &[0x1f647, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f647, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f647, 0x1f3fd],
    &[0x1f647, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f647, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f647, 0x1f3fe], &[0x1f647, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f647, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f647, 0x1f3ff],
    &[0x1f647, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f647, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64b, 0x200d, 0x2640, 0xfe0f], &[0x1f64b, 0x200d, 0x2642, 0xfe0f], &[0x1f64b, 0x1f3fb],
    &[0x1f64b, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f64b, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64b, 0x1f3fc], &[0x1f64b, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64b, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f64b, 0x1f3fd],
    &[0x1f64b, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f64b, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64b, 0x1f3fe], &[0x1f64b, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64b, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f64b, 0x1f3ff],
    &[0x1f64b, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f64b, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64c, 0x1f3fb], &[0x1f64c, 0x1f3fc], &[0x1f64c, 0x1f3fd], &[0x1f64c, 0x1f3fe],
    &[0x1f64c, 0x1f3ff], &[0x1f64d, 0x200d, 0x2640, 0xfe0f], &[0x1f64d, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64d, 0x1f3fb], &[0x1f64d, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64d, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f64d, 0x1f3fc],
    &[0x1f64d, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f64d, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64d, 0x1f3fd], &[0x1f64d, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64d, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f64d, 0x1f3fe],
    &[0x1f64d, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f64d, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64d, 0x1f3ff], &[0x1f64d, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64d, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f64e, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64e, 0x200d, 0x2642, 0xfe0f], &[0x1f64e, 0x1f3fb],
    &[0x1f64e, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f64e, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64e, 0x1f3fc], &[0x1f64e, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64e, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f64e, 0x1f3fd],
    &[0x1f64e, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f64e, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64e, 0x1f3fe], &[0x1f64e, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f64e, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f64e, 0x1f3ff],
    &[0x1f64e, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f64e, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f64f, 0x1f3fb], &[0x1f64f, 0x1f3fc], &[0x1f64f, 0x1f3fd], &[0x1f64f, 0x1f3fe],
    &[0x1f64f, 0x1f3ff], &[0x1f6a3, 0x200d, 0x2640, 0xfe0f], &[0x1f6a3, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6a3, 0x1f3fb], &[0x1f6a3, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6a3, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f6a3, 0x1f3fc],
    &[0x1f6a3, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f6a3, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6a3, 0x1f3fd], &[0x1f6a3, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6a3, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f6a3, 0x1f3fe],
    &[0x1f6a3, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f6a3, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6a3, 0x1f3ff], &[0x1f6a3, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6a3, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f6b4, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b4, 0x200d, 0x2642, 0xfe0f], &[0x1f6b4, 0x1f3fb],
    &[0x1f6b4, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f6b4, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b4, 0x1f3fc], &[0x1f6b4, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b4, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f6b4, 0x1f3fd],
    &[0x1f6b4, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f6b4, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b4, 0x1f3fe], &[0x1f6b4, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b4, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f6b4, 0x1f3ff],
    &[0x1f6b4, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f6b4, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b5, 0x200d, 0x2640, 0xfe0f], &[0x1f6b5, 0x200d, 0x2642, 0xfe0f], &[0x1f6b5, 0x1f3fb],
    &[0x1f6b5, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f6b5, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b5, 0x1f3fc], &[0x1f6b5, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b5, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f6b5, 0x1f3fd],
    &[0x1f6b5, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f6b5, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b5, 0x1f3fe], &[0x1f6b5, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b5, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f6b5, 0x1f3ff],
    &[0x1f6b5, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f6b5, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b6, 0x200d, 0x2640, 0xfe0f], &[0x1f6b6, 0x200d, 0x2642, 0xfe0f], &[0x1f6b6, 0x1f3fb],
    &[0x1f6b6, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f6b6, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b6, 0x1f3fc], &[0x1f6b6, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b6, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f6b6, 0x1f3fd],
    &[0x1f6b6, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f6b6, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6b6, 0x1f3fe], &[0x1f6b6, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f6b6, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f6b6, 0x1f3ff],
    &[0x1f6b6, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f6b6, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f6c0, 0x1f3fb], &[0x1f6c0, 0x1f3fc], &[0x1f6c0, 0x1f3fd], &[0x1f6c0, 0x1f3fe],
    &[0x1f6c0, 0x1f3ff], &[0x1f6cc, 0x1f3fb], &[0x1f6cc, 0x1f3fc], &[0x1f6cc, 0x1f3fd],
    &[0x1f6cc, 0x1f3fe], &[0x1f6cc, 0x1f3ff], &[0x1f90c, 0x1f3fb], &[0x1f90c, 0x1f3fc],
    &[0x1f90c, 0x1f3fd], &[0x1f90c, 0x1f3fe], &[0x1f90c, 0x1f3ff], &[0x1f90f, 0x1f3fb],
    &[0x1f90f, 0x1f3fc], &[0x1f90f, 0x1f3fd], &[0x1f90f, 0x1f3fe], &[0x1f90f, 0x1f3ff],
    &[0x1f918, 0x1f3fb], &[0x1f918, 0x1f3fc], &[0x1f918, 0x1f3fd], &[0x1f918, 0x1f3fe],
    &[0x1f918, 0x1f3ff], &[0x1f919, 0x1f3fb], &[0x1f919, 0x1f3fc], &[0x1f919, 0x1f3fd],
    &[0x1f919, 0x1f3fe], &[0x1f919, 0x1f3ff], &[0x1f91a, 0x1f3fb], &[0x1f91a, 0x1f3fc],
    &[0x1f91a, 0x1f3fd], &[0x1f91a, 0x1f3fe], &[0x1f91a, 0x1f3ff], &[0x1f91b, 0x1f3fb],
    &[0x1f91b, 0x1f3fc], &[0x1f91b, 0x1f3fd], &[0x1f91b, 0x1f3fe], &[0x1f91b, 0x1f3ff],
    &[0x1f91c, 0x1f3fb], &[0x1f91c, 0x1f3fc], &[0x1f91c, 0x1f3fd], &[0x1f91c, 0x1f3fe],
    &[0x1f91c, 0x1f3ff], &[0x1f91d, 0x1f3fb], &[0x1f91d, 0x1f3fc], &[0x1f91d, 0x1f3fd],
    &[0x1f91d, 0x1f3fe], &[0x1f91d, 0x1f3ff], &[0x1f91e, 0x1f3fb], &[0x1f91e, 0x1f3fc],
    &[0x1f91e, 0x1f3fd], &[0x1f91e, 0x1f3fe], &[0x1f91e, 0x1f3ff], &[0x1f91f, 0x1f3fb],
    &[0x1f91f, 0x1f3fc], &[0x1f91f, 0x1f3fd], &[0x1f91f, 0x1f3fe], &[0x1f91f, 0x1f3ff],
    &[0x1f926, 0x200d, 0x2640, 0xfe0f], &[0x1f926, 0x200d, 0x2642, 0xfe0f], &[0x1f926, 0x1f3fb],
    &[0x1f926, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f926, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f926, 0x1f3fc], &[0x1f926, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f926, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f926, 0x1f3fd],
    &[0x1f926, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f926, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f926, 0x1f3fe], &[0x1f926, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f926, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f926, 0x1f3ff],
    &[0x1f926, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f926, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f930, 0x1f3fb], &[0x1f930, 0x1f3fc], &[0x1f930, 0x1f3fd], &[0x1f930, 0x1f3fe],
    &[0x1f930, 0x1f3ff], &[0x1f931, 0x1f3fb], &[0x1f931, 0x1f3fc], &[0x1f931, 0x1f3fd],
    &[0x1f931, 0x1f3fe], &[0x1f931, 0x1f3ff], &[0x1f932, 0x1f3fb], &[0x1f932, 0x1f3fc],
    &[0x1f932, 0x1f3fd], &[0x1f932, 0x1f3fe], &[0x1f932, 0x1f3ff], &[0x1f933, 0x1f3fb],
    &[0x1f933, 0x1f3fc], &[0x1f933, 0x1f3fd], &[0x1f933, 0x1f3fe], &[0x1f933, 0x1f3ff],
    &[0x1f934, 0x1f3fb], &[0x1f934, 0x1f3fc], &[0x1f934, 0x1f3fd], &[0x1f934, 0x1f3fe],
    &[0x1f934, 0x1f3ff], &[0x1f935, 0x200d, 0x2640, 0xfe0f], &[0x1f935, 0x200d, 0x2642, 0xfe0f],
    &[0x1f935, 0x1f3fb], &[0x1f935, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f935, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f935, 0x1f3fc],
    &[0x1f935, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f935, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f935, 0x1f3fd], &[0x1f935, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f935, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f935, 0x1f3fe],
    &[0x1f935, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f935, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f935, 0x1f3ff], &[0x1f935, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f935, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f936, 0x1f3fb], &[0x1f936, 0x1f3fc],
    &[0x1f936, 0x1f3fd], &[0x1f936, 0x1f3fe], &[0x1f936, 0x1f3ff],
    &[0x1f937, 0x200d, 0x2640, 0xfe0f], &[0x1f937, 0x200d, 0x2642, 0xfe0f], &[0x1f937, 0x1f3fb],
    &[0x1f937, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f937, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f937, 0x1f3fc], &[0x1f937, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f937, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f937, 0x1f3fd],
    &[0x1f937, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f937, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f937, 0x1f3fe], &[0x1f937, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f937, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f937, 0x1f3ff],
    &[0x1f937, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f937, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f938, 0x200d, 0x2640, 0xfe0f], &[0x1f938, 0x200d, 0x2642, 0xfe0f], &[0x1f938, 0x1f3fb],
    &[0x1f938, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f938, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f938, 0x1f3fc], &[0x1f938, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f938, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f938, 0x1f3fd],
    &[0x1f938, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f938, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f938, 0x1f3fe], &[0x1f938, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f938, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f938, 0x1f3ff],
    &[0x1f938, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f938, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f939, 0x200d, 0x2640, 0xfe0f], &[0x1f939, 0x200d, 0x2642, 0xfe0f], &[0x1f939, 0x1f3fb],
    &[0x1f939, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f939, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f939, 0x1f3fc], &[0x1f939, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f939, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f939, 0x1f3fd],
    &[0x1f939, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f939, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f939, 0x1f3fe], &[0x1f939, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f939, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f939, 0x1f3ff],
    &[0x1f939, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f939, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93c, 0x200d, 0x2640, 0xfe0f], &[0x1f93c, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93d, 0x200d, 0x2640, 0xfe0f], &[0x1f93d, 0x200d, 0x2642, 0xfe0f], &[0x1f93d, 0x1f3fb],
    &[0x1f93d, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f93d, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93d, 0x1f3fc], &[0x1f93d, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f93d, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f93d, 0x1f3fd],
    &[0x1f93d, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f93d, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93d, 0x1f3fe], &[0x1f93d, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f93d, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f93d, 0x1f3ff],
    &[0x1f93d, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f93d, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93e, 0x200d, 0x2640, 0xfe0f], &[0x1f93e, 0x200d, 0x2642, 0xfe0f], &[0x1f93e, 0x1f3fb],
    &[0x1f93e, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f93e, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93e, 0x1f3fc], &[0x1f93e, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f93e, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f93e, 0x1f3fd],
    &[0x1f93e, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f93e, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f93e, 0x1f3fe], &[0x1f93e, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f93e, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f93e, 0x1f3ff],
    &[0x1f93e, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f93e, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f977, 0x1f3fb], &[0x1f977, 0x1f3fc], &[0x1f977, 0x1f3fd], &[0x1f977, 0x1f3fe],
    &[0x1f977, 0x1f3ff], &[0x1f9b5, 0x1f3fb], &[0x1f9b5, 0x1f3fc], &[0x1f9b5, 0x1f3fd],
    &[0x1f9b5, 0x1f3fe], &[0x1f9b5, 0x1f3ff], &[0x1f9b6, 0x1f3fb], &[0x1f9b6, 0x1f3fc],
    &[0x1f9b6, 0x1f3fd], &[0x1f9b6, 0x1f3fe], &[0x1f9b6, 0x1f3ff],
    &[0x1f9b8, 0x200d, 0x2640, 0xfe0f], &[0x1f9b8, 0x200d, 0x2642, 0xfe0f], &[0x1f9b8, 0x1f3fb],
    &[0x1f9b8, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9b8, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9b8, 0x1f3fc], &[0x1f9b8, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9b8, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9b8, 0x1f3fd],
    &[0x1f9b8, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9b8, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9b8, 0x1f3fe], &[0x1f9b8, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9b8, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9b8, 0x1f3ff],
    &[0x1f9b8, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9b8, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9b9, 0x200d, 0x2640, 0xfe0f], &[0x1f9b9, 0x200d, 0x2642, 0xfe0f], &[0x1f9b9, 0x1f3fb],
    &[0x1f9b9, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9b9, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9b9, 0x1f3fc], &[0x1f9b9, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9b9, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9b9, 0x1f3fd],
    &[0x1f9b9, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9b9, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9b9, 0x1f3fe], &[0x1f9b9, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9b9, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9b9, 0x1f3ff],
    &[0x1f9b9, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9b9, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9bb, 0x1f3fb], &[0x1f9bb, 0x1f3fc], &[0x1f9bb, 0x1f3fd], &[0x1f9bb, 0x1f3fe],
    &[0x1f9bb, 0x1f3ff], &[0x1f9cd, 0x200d, 0x2640, 0xfe0f], &[0x1f9cd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9cd, 0x1f3fb], &[0x1f9cd, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9cd, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f9cd, 0x1f3fc],
    &[0x1f9cd, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f9cd, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9cd, 0x1f3fd], &[0x1f9cd, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9cd, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f9cd, 0x1f3fe],
    &[0x1f9cd, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f9cd, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9cd, 0x1f3ff], &[0x1f9cd, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9cd, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f9ce, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9ce, 0x200d, 0x2642, 0xfe0f], &[0x1f9ce, 0x1f3fb],
    &[0x1f9ce, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9ce, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9ce, 0x1f3fc], &[0x1f9ce, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9ce, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9ce, 0x1f3fd],
    &[0x1f9ce, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9ce, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9ce, 0x1f3fe], &[0x1f9ce, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9ce, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9ce, 0x1f3ff],
    &[0x1f9ce, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9ce, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9cf, 0x200d, 0x2640, 0xfe0f], &[0x1f9cf, 0x200d, 0x2642, 0xfe0f], &[0x1f9cf, 0x1f3fb],
    &[0x1f9cf, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9cf, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9cf, 0x1f3fc], &[0x1f9cf, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9cf, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9cf, 0x1f3fd],
    &[0x1f9cf, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9cf, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9cf, 0x1f3fe], &[0x1f9cf, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9cf, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9cf, 0x1f3ff],
    &[0x1f9cf, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9cf, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d1, 0x200d, 0x2695, 0xfe0f], &[0x1f9d1, 0x200d, 0x2696, 0xfe0f],
    &[0x1f9d1, 0x200d, 0x2708, 0xfe0f], &[0x1f9d1, 0x200d, 0x1f33e], &[0x1f9d1, 0x200d, 0x1f373],
    &[0x1f9d1, 0x200d, 0x1f37c], &[0x1f9d1, 0x200d, 0x1f384], &[0x1f9d1, 0x200d, 0x1f393],
    &[0x1f9d1, 0x200d, 0x1f3a4], &[0x1f9d1, 0x200d, 0x1f3a8], &[0x1f9d1, 0x200d, 0x1f3eb],
    &[0x1f9d1, 0x200d, 0x1f3ed], &[0x1f9d1, 0x200d, 0x1f4bb], &[0x1f9d1, 0x200d, 0x1f4bc],
    &[0x1f9d1, 0x200d, 0x1f527], &[0x1f9d1, 0x200d, 0x1f52c], &[0x1f9d1, 0x200d, 0x1f680],
    &[0x1f9d1, 0x200d, 0x1f692], &[0x1f9d1, 0x200d, 0x1f91d, 0x200d, 0x1f9d1],
    &[0x1f9d1, 0x200d, 0x1f9af], &[0x1f9d1, 0x200d, 0x1f9b0], &[0x1f9d1, 0x200d, 0x1f9b1],
    &[0x1f9d1, 0x200d, 0x1f9b2], &[0x1f9d1, 0x200d, 0x1f9b3], &[0x1f9d1, 0x200d, 0x1f9bc],
    &[0x1f9d1, 0x200d, 0x1f9bd], &[0x1f9d1, 0x1f3fb], &[0x1f9d1, 0x1f3fb, 0x200d, 0x2695, 0xfe0f],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x2696, 0xfe0f], &[0x1f9d1, 0x1f3fb, 0x200d, 0x2708, 0xfe0f],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f33e], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f373],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f37c], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f384],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f393], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f3a4],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f3a8], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f3eb],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f3ed], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f4bb],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f4bc], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f527],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f52c], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f680],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f692],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fb],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fc],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fd],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fe],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3ff],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9af], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9b0],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9b1], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9b2],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9b3], &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9bc],
    &[0x1f9d1, 0x1f3fb, 0x200d, 0x1f9bd], &[0x1f9d1, 0x1f3fc],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x2695, 0xfe0f], &[0x1f9d1, 0x1f3fc, 0x200d, 0x2696, 0xfe0f],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x2708, 0xfe0f], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f33e],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f373], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f37c],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f384], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f393],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f3a4], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f3a8],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f3eb], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f3ed],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f4bb], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f4bc],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f527], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f52c],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f680], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f692],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fb],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fc],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fd],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3ff],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9af], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9b0],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9b1], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9b2],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9b3], &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9bc],
    &[0x1f9d1, 0x1f3fc, 0x200d, 0x1f9bd], &[0x1f9d1, 0x1f3fd],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x2695, 0xfe0f], &[0x1f9d1, 0x1f3fd, 0x200d, 0x2696, 0xfe0f],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x2708, 0xfe0f], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f33e],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f373], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f37c],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f384], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f393],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f3a4], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f3a8],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f3eb], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f3ed],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f4bb], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f4bc],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f527], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f52c],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f680], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f692],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fb],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fc],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fd],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fe],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3ff],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9af], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9b0],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9b1], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9b2],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9b3], &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9bc],
    &[0x1f9d1, 0x1f3fd, 0x200d, 0x1f9bd], &[0x1f9d1, 0x1f3fe],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x2695, 0xfe0f], &[0x1f9d1, 0x1f3fe, 0x200d, 0x2696, 0xfe0f],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x2708, 0xfe0f], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f33e],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f373], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f37c],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f384], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f393],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f3a4], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f3a8],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f3eb], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f3ed],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f4bb], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f4bc],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f527], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f52c],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f680], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f692],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fb],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fd],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fe],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3ff],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9af], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9b0],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9b1], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9b2],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9b3], &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9bc],
    &[0x1f9d1, 0x1f3fe, 0x200d, 0x1f9bd], &[0x1f9d1, 0x1f3ff],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x2695, 0xfe0f], &[0x1f9d1, 0x1f3ff, 0x200d, 0x2696, 0xfe0f],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x2708, 0xfe0f], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f33e],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f373], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f37c],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f384], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f393],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f3a4], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f3a8],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f3eb], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f3ed],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f4bb], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f4bc],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f527], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f52c],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f680], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f692],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fb],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fc],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fd],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3fe],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f91d, 0x200d, 0x1f9d1, 0x1f3ff],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9af], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9b0],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9b1], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9b2],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9b3], &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9bc],
    &[0x1f9d1, 0x1f3ff, 0x200d, 0x1f9bd], &[0x1f9d2, 0x1f3fb], &[0x1f9d2, 0x1f3fc],
    &[0x1f9d2, 0x1f3fd], &[0x1f9d2, 0x1f3fe], &[0x1f9d2, 0x1f3ff], &[0x1f9d3, 0x1f3fb],
    &[0x1f9d3, 0x1f3fc], &[0x1f9d3, 0x1f3fd], &[0x1f9d3, 0x1f3fe], &[0x1f9d3, 0x1f3ff],
    &[0x1f9d4, 0x200d, 0x2640, 0xfe0f], &[0x1f9d4, 0x200d, 0x2642, 0xfe0f], &[0x1f9d4, 0x1f3fb],
    &[0x1f9d4, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9d4, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d4, 0x1f3fc], &[0x1f9d4, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d4, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9d4, 0x1f3fd],
    &[0x1f9d4, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9d4, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d4, 0x1f3fe], &[0x1f9d4, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d4, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9d4, 0x1f3ff],
    &[0x1f9d4, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9d4, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d5, 0x1f3fb], &[0x1f9d5, 0x1f3fc], &[0x1f9d5, 0x1f3fd], &[0x1f9d5, 0x1f3fe],
    &[0x1f9d5, 0x1f3ff], &[0x1f9d6, 0x200d, 0x2640, 0xfe0f], &[0x1f9d6, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d6, 0x1f3fb], &[0x1f9d6, 0x1f3fb, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d6, 0x1f3fb, 0x200d, 0x2642, 0xfe0f], &[0x1f9d6, 0x1f3fc],
    &[0x1f9d6, 0x1f3fc, 0x200d, 0x2640, 0xfe0f], &[0x1f9d6, 0x1f3fc, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d6, 0x1f3fd], &[0x1f9d6, 0x1f3fd, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d6, 0x1f3fd, 0x200d, 0x2642, 0xfe0f], &[0x1f9d6, 0x1f3fe],
    &[0x1f9d6, 0x1f3fe, 0x200d, 0x2640, 0xfe0f], &[0x1f9d6, 0x1f3fe, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d6, 0x1f3ff], &[0x1f9d6, 0x1f3ff, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d6, 0x1f3ff, 0x200d, 0x2642, 0xfe0f], &[0x1f9d7, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d7, 0x200d, 0x2642, 0xfe0f], &[0x1f9d7, 0x1f3fb],
    &[0x1f9d7, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9d7, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d7, 0x1f3fc], &[0x1f9d7, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d7, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9d7, 0x1f3fd],
    &[0x1f9d7, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9d7, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d7, 0x1f3fe], &[0x1f9d7, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d7, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9d7, 0x1f3ff],
    &[0x1f9d7, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9d7, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d8, 0x200d, 0x2640, 0xfe0f], &[0x1f9d8, 0x200d, 0x2642, 0xfe0f], &[0x1f9d8, 0x1f3fb],
    &[0x1f9d8, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9d8, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d8, 0x1f3fc], &[0x1f9d8, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d8, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9d8, 0x1f3fd],
    &[0x1f9d8, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9d8, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d8, 0x1f3fe], &[0x1f9d8, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d8, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9d8, 0x1f3ff],
    &[0x1f9d8, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9d8, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d9, 0x200d, 0x2640, 0xfe0f], &[0x1f9d9, 0x200d, 0x2642, 0xfe0f], &[0x1f9d9, 0x1f3fb],
    &[0x1f9d9, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9d9, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d9, 0x1f3fc], &[0x1f9d9, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d9, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9d9, 0x1f3fd],
    &[0x1f9d9, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9d9, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9d9, 0x1f3fe], &[0x1f9d9, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9d9, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9d9, 0x1f3ff],
    &[0x1f9d9, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9d9, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9da, 0x200d, 0x2640, 0xfe0f], &[0x1f9da, 0x200d, 0x2642, 0xfe0f], &[0x1f9da, 0x1f3fb],
    &[0x1f9da, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9da, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9da, 0x1f3fc], &[0x1f9da, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9da, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9da, 0x1f3fd],
    &[0x1f9da, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9da, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9da, 0x1f3fe], &[0x1f9da, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9da, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9da, 0x1f3ff],
    &[0x1f9da, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9da, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9db, 0x200d, 0x2640, 0xfe0f], &[0x1f9db, 0x200d, 0x2642, 0xfe0f], &[0x1f9db, 0x1f3fb],
    &[0x1f9db, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9db, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9db, 0x1f3fc], &[0x1f9db, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9db, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9db, 0x1f3fd],
    &[0x1f9db, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9db, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9db, 0x1f3fe], &[0x1f9db, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9db, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9db, 0x1f3ff],
    &[0x1f9db, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9db, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9dc, 0x200d, 0x2640, 0xfe0f], &[0x1f9dc, 0x200d, 0x2642, 0xfe0f], &[0x1f9dc, 0x1f3fb],
    &[0x1f9dc, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9dc, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9dc, 0x1f3fc], &[0x1f9dc, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9dc, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9dc, 0x1f3fd],
    &[0x1f9dc, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9dc, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9dc, 0x1f3fe], &[0x1f9dc, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9dc, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9dc, 0x1f3ff],
    &[0x1f9dc, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9dc, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9dd, 0x200d, 0x2640, 0xfe0f], &[0x1f9dd, 0x200d, 0x2642, 0xfe0f], &[0x1f9dd, 0x1f3fb],
    &[0x1f9dd, 0x1f3fb, 0x200d, 0x2640, 0xfe0f], &[0x1f9dd, 0x1f3fb, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9dd, 0x1f3fc], &[0x1f9dd, 0x1f3fc, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9dd, 0x1f3fc, 0x200d, 0x2642, 0xfe0f], &[0x1f9dd, 0x1f3fd],
    &[0x1f9dd, 0x1f3fd, 0x200d, 0x2640, 0xfe0f], &[0x1f9dd, 0x1f3fd, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9dd, 0x1f3fe], &[0x1f9dd, 0x1f3fe, 0x200d, 0x2640, 0xfe0f],
    &[0x1f9dd, 0x1f3fe, 0x200d, 0x2642, 0xfe0f], &[0x1f9dd, 0x1f3ff],
    &[0x1f9dd, 0x1f3ff, 0x200d, 0x2640, 0xfe0f], &[0x1f9dd, 0x1f3ff, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9de, 0x200d, 0x2640, 0xfe0f], &[0x1f9de, 0x200d, 0x2642, 0xfe0f],
    &[0x1f9df, 0x200d, 0x2640, 0xfe0f], &[0x1f9df, 0x200d, 0x2642, 0xfe0f], &[0x1fac3, 0x1f3fb],
    &[0x1fac3, 0x1f3fc], &[0x1fac3, 0x1f3fd], &[0x1fac3, 0x1f3fe], &[0x1fac3, 0x1f3ff],
    &[0x1fac4, 0x1f3fb], &[0x1fac4, 0x1f3fc], &[0x1fac4, 0x1f3fd], &[0x1fac4, 0x1f3fe],
    &[0x1fac4, 0x1f3ff], &[0x1fac5, 0x1f3fb], &[0x1fac5, 0x1f3fc], &[0x1fac5, 0x1f3fd],
    &[0x1fac5, 0x1f3fe], &[0x1fac5, 0x1f3ff], &[0x1faf0, 0x1f3fb], &[0x1faf0, 0x1f3fd],
    &[0x1faf0, 0x1f3ff], &[0x1faf1, 0x1f3fb], &[0x1faf1, 0x1f3fb, 0x200d, 0x1faf2, 0x1f3fc],
    &[0x1faf1, 0x1f3fb, 0x200d, 0x1faf2, 0x1f3fd], &[0x1faf1, 0x1f3fb, 0x200d, 0x1faf2, 0x1f3fe],
    &[0x1faf1, 0x1f3fb, 0x200d, 0x1faf2, 0x1f3ff], &[0x1faf1, 0x1f3fc],
    &[0x1faf1, 0x1f3fc, 0x200d, 0x1faf2, 0x1f3fb], &[0x1faf1, 0x1f3fc, 0x200d, 0x1faf2, 0x1f3fd],
    &[0x1faf1, 0x1f3fc, 0x200d, 0x1faf2, 0x1f3fe], &[0x1faf1, 0x1f3fc, 0x200d, 0x1faf2, 0x1f3ff],
    &[0x1faf1, 0x1f3fd], &[0x1faf1, 0x1f3fd, 0x200d, 0x1faf2, 0x1f3fb],
    &[0x1faf1, 0x1f3fd, 0x200d, 0x1faf2, 0x1f3fc], &[0x1faf1, 0x1f3fd, 0x200d, 0x1faf2, 0x1f3fe],
    &[0x1faf1, 0x1f3fd, 0x200d, 0x1faf2, 0x1f3ff], &[0x1faf1, 0x1f3fe],
    &[0x1faf1, 0x1f3fe, 0x200d, 0x1faf2, 0x1f3fb], &[0x1faf1, 0x1f3fe, 0x200d, 0x1faf2, 0x1f3fc],
    &[0x1faf1, 0x1f3fe, 0x200d, 0x1faf2, 0x1f3fd], &[0x1faf1, 0x1f3fe, 0x200d, 0x1faf2, 0x1f3ff],
    &[0x1faf1, 0x1f3ff], &[0x1faf1, 0x1f3ff, 0x200d, 0x1faf2, 0x1f3fb],
    &[0x1faf1, 0x1f3ff, 0x200d, 0x1faf2, 0x1f3fc], &[0x1faf1, 0x1f3ff, 0x200d, 0x1faf2, 0x1f3fd],
    &[0x1faf1, 0x1f3ff, 0x200d, 0x1faf2, 0x1f3fe], &[0x1faf2, 0x1f3fb], &[0x1faf2, 0x1f3fc],
    &[0x1faf2, 0x1f3fd], &[0x1faf2, 0x1f3fe], &[0x1faf2, 0x1f3ff], &[0x1faf3, 0x1f3fb],
    &[0x1faf3, 0x1f3fc], &[0x1faf3, 0x1f3fd], &[0x1faf3, 0x1f3fe], &[0x1faf3, 0x1f3ff],
    &[0x1faf4, 0x1f3fb], &[0x1faf4, 0x1f3fc], &[0x1faf4, 0x1f3fd], &[0x1faf4, 0x1f3fe],
    &[0x1faf4, 0x1f3ff], &[0x1faf5, 0x1f3fb], &[0x1faf5, 0x1f3fc], &[0x1faf5, 0x1f3fd],
    &[0x1faf5, 0x1f3fe], &[0x1faf5, 0x1f3ff], &[0x1faf6, 0x1f3fb], &[0x1faf6, 0x1f3fc],
    &[0x1faf6, 0x1f3fd], &[0x1faf6, 0x1f3fe], &[0x1faf6, 0x1f3ff],
];
