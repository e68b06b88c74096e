/*!
# Generated Code

Kokoro keeps a few fixed locations outside of variable memory.

| Address | Use |
|---------|-----|
| `$0200` | First variable |
| `$E000` | Screen memory, 40 columns wide |
| `$F002` | Cursor column |
| `$F003` | Cursor row |
| `$F004`-`$F006` | Scratch cells for multiplying by 40 |

`print` also expects the program around it to define the zero page pair
`temp_addr_low` and `temp_addr_high`.

## Targets

The `6502` target multiplies by 40 with shifts, since `40 = 32 + 8`.

```text
LDA $F003
STA $F004
LDA $F004
ASL A
ASL A
ASL A
ASL A
ASL A
STA $F005
LDA $F004
ASL A
ASL A
ASL A
STA $F006
CLC
LDA $F005
ADC $F006
```

Any other multiplication, and every division, is left as a comment for
you to finish by hand.

The `mega6502` target writes `MUL x, y` and `DIV x, y` directly.
*/
